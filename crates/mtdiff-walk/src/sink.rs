use std::io::{self, Write};

use crate::record::NodeChange;

/// Ordered output boundary for diff records.
///
/// The walker emits changes in traversal order; sinks must preserve that
/// order. A sink error aborts the run.
pub trait DiffSink {
    /// Write one change record.
    fn emit(&mut self, change: &NodeChange<'_>) -> io::Result<()>;

    /// Flush any buffered output.
    fn flush(&mut self) -> io::Result<()>;
}

/// The default text format: five space-separated fields per line,
/// `x y z old_name new_name`.
#[derive(Debug)]
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DiffSink for TextSink<W> {
    fn emit(&mut self, change: &NodeChange<'_>) -> io::Result<()> {
        writeln!(
            self.out,
            "{} {} {} {} {}",
            change.x, change.y, change.z, change.old, change.new
        )
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// One JSON object per line.
#[derive(Debug)]
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DiffSink for JsonSink<W> {
    fn emit(&mut self, change: &NodeChange<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, change)?;
        self.out.write_all(b"\n")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use mtdiff_types::NodePos;

    use super::*;

    fn change() -> NodeChange<'static> {
        NodeChange::new(NodePos { x: 19, y: -6, z: 1 }, "air", "default:stone")
    }

    #[test]
    fn text_sink_writes_five_fields() {
        let mut sink = TextSink::new(Vec::new());
        sink.emit(&change()).unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "19 -6 1 air default:stone\n");
    }

    #[test]
    fn json_sink_writes_one_object_per_line() {
        let mut sink = JsonSink::new(Vec::new());
        sink.emit(&change()).unwrap();
        sink.emit(&change()).unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["x"], 19);
        assert_eq!(value["y"], -6);
        assert_eq!(value["old"], "air");
        assert_eq!(value["new"], "default:stone");
    }
}

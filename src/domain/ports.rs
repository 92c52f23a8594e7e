use crate::utils::error::Result;

/// Destination for rendered text lines.
pub trait Sink {
    fn emit(&mut self, line: &str) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Writes every line in order and returns how many were written.
pub fn emit_all<I, S>(sink: &mut dyn Sink, lines: I) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut written = 0;
    for line in lines {
        sink.emit(line.as_ref())?;
        written += 1;
    }
    Ok(written)
}

pub trait Pipeline {
    type Item;

    fn name(&self) -> &'static str;
    fn extract(&self) -> Result<Vec<Self::Item>>;
    fn transform(&self, items: Vec<Self::Item>) -> Result<Vec<Self::Item>>;
    fn load(&self, items: &[Self::Item], sink: &mut dyn Sink) -> Result<usize>;
}

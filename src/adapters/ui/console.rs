//! Line-oriented console I/O: prompts, blank-to-absent normalization and typed converters.
//!
//! Generic over the reader and writer so sessions can be driven from byte buffers in tests.

use crate::domain::{Decimal, DomainError, ValidationError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Prompts are printed as `"<prompt>: "` with no newline before the read.
pub const PROMPT_SUFFIX: &str = ": ";

pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print `prompt: ` and read one line.
    ///
    /// Blank or whitespace-only input is `None`; anything else is returned trimmed.
    /// End of input is [`DomainError::InputClosed`].
    pub async fn read_line(&mut self, prompt: &str) -> Result<Option<String>, DomainError> {
        self.print(&format!("{}{}", prompt, PROMPT_SUFFIX)).await?;

        let mut line = String::new();
        let n = self
            .reader
            .read_line(&mut line)
            .await
            .map_err(|e| DomainError::Console(e.to_string()))?;
        if n == 0 {
            return Err(DomainError::InputClosed);
        }

        let trimmed = line.trim();
        Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
    }

    /// Read a decimal normalized to two fractional digits.
    pub async fn read_decimal(&mut self, prompt: &str) -> Result<Option<Decimal>, DomainError> {
        match self.read_line(prompt).await? {
            Some(text) => Ok(Some(text.parse::<Decimal>()?)),
            None => Ok(None),
        }
    }

    /// Read a base-10 integer. No range check.
    pub async fn read_integer(&mut self, prompt: &str) -> Result<Option<i32>, DomainError> {
        match self.read_line(prompt).await? {
            Some(text) => text
                .parse::<i32>()
                .map(Some)
                .map_err(|_| ValidationError::new(text, "number").into()),
            None => Ok(None),
        }
    }

    /// Write `text` followed by a newline.
    pub async fn print_line(&mut self, text: &str) -> Result<(), DomainError> {
        self.print(&format!("{}\n", text)).await
    }

    async fn print(&mut self, text: &str) -> Result<(), DomainError> {
        self.writer
            .write_all(text.as_bytes())
            .await
            .map_err(|e| DomainError::Console(e.to_string()))?;
        self.writer
            .flush()
            .await
            .map_err(|e| DomainError::Console(e.to_string()))
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    #[tokio::test]
    async fn test_read_line_trims_and_prompts() {
        let mut c = console("  Widget  \n");
        let got = c.read_line("Enter the project name").await.unwrap();
        assert_eq!(got.as_deref(), Some("Widget"));
        assert_eq!(
            String::from_utf8(c.into_writer()).unwrap(),
            "Enter the project name: "
        );
    }

    #[tokio::test]
    async fn test_blank_input_is_absent() {
        let mut c = console("\n   \n\t\r\n");
        for _ in 0..3 {
            assert_eq!(c.read_line("x").await.unwrap(), None);
        }
    }

    #[tokio::test]
    async fn test_blank_input_is_absent_for_typed_reads() {
        let mut c = console("\n \n");
        assert_eq!(c.read_decimal("hours").await.unwrap(), None);
        assert_eq!(c.read_integer("difficulty").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_end_of_input_is_input_closed() {
        let mut c = console("");
        assert!(matches!(
            c.read_line("x").await,
            Err(DomainError::InputClosed)
        ));
    }

    #[tokio::test]
    async fn test_read_decimal_normalizes() {
        let mut c = console("5\n5.1\n5.126\n");
        let mut got = Vec::new();
        for _ in 0..3 {
            got.push(c.read_decimal("h").await.unwrap().unwrap().to_string());
        }
        assert_eq!(got, ["5.00", "5.10", "5.13"]);
    }

    #[tokio::test]
    async fn test_read_decimal_rejects_text() {
        let mut c = console("abc\n");
        let err = c.read_decimal("h").await.unwrap_err();
        assert_eq!(err.to_string(), "abc is not a valid decimal number.");
    }

    #[tokio::test]
    async fn test_read_integer() {
        let mut c = console("3\n-7\n99\n+4\n");
        for expected in [3, -7, 99, 4] {
            assert_eq!(c.read_integer("n").await.unwrap(), Some(expected));
        }
    }

    #[tokio::test]
    async fn test_read_integer_rejects_non_integer() {
        let mut c = console("two\n2.5\n99999999999\n");
        for input in ["two", "2.5", "99999999999"] {
            match c.read_integer("n").await {
                Err(DomainError::Validation(e)) => {
                    assert_eq!(e.input, input);
                    assert_eq!(e.expected, "number");
                    assert!(e.to_string().contains(input));
                }
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }
}

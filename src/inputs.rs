#[derive(Debug, Clone)]
pub enum Error {
    UnreadableInput(String),
    NotUtf8(std::str::Utf8Error),
}

#[rustfmt::skip]
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnreadableInput(message) => write!(f, "{}", message),
            Self::NotUtf8(e) => write!(f, "input is not UTF-8: {}", e),
        }
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(value: std::str::Utf8Error) -> Self {
        Self::NotUtf8(value)
    }
}

/// Reads the whole input and splits it into whitespace-separated specs.
pub fn specs_from_reader(mut reader: impl std::io::Read) -> Result<Vec<String>, Error> {
    let mut bytes = vec![];
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::UnreadableInput(e.to_string()))?;
    let text = std::str::from_utf8(&bytes)?;
    Ok(text.split_ascii_whitespace().map(str::to_owned).collect())
}

pub fn load_stdin() -> Result<Vec<String>, Error> {
    specs_from_reader(std::io::stdin().lock())
}

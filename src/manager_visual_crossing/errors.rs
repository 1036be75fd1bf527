use std::fmt;

#[derive(Debug)]
pub enum VCError {
    Status(u16, String),
    Timeout(String),
    Transport(String),
    Document(String),
    Url(String),
    NoDays,
}

impl fmt::Display for VCError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VCError::Status(s, e) => write!(f, "VCError::Status: {} {}", s, e),
            VCError::Timeout(e) => write!(f, "VCError::Timeout: {}", e),
            VCError::Transport(e) => write!(f, "VCError::Transport: {}", e),
            VCError::Document(e) => write!(f, "VCError::Document: {}", e),
            VCError::Url(e) => write!(f, "VCError::Url: {}", e),
            VCError::NoDays => write!(f, "VCError::NoDays: no day record in response"),
        }
    }
}
impl From<reqwest::Error> for VCError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            VCError::Timeout(e.to_string())
        } else {
            VCError::Transport(e.to_string())
        }
    }
}
impl From<serde_json::Error> for VCError {
    fn from(e: serde_json::Error) -> Self {
        VCError::Document(e.to_string())
    }
}

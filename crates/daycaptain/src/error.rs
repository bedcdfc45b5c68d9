use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DcError {
    InvalidDate(String),
    InvalidWeek(String),
    AmbiguousOptions(Vec<String>),
    RemoteRejected { status: u16, body: String },
    Transport(String),
}

impl DcError {
    pub fn invalid_date<M: Into<String>>(message: M) -> Self {
        Self::InvalidDate(message.into())
    }

    pub fn invalid_week<M: Into<String>>(message: M) -> Self {
        Self::InvalidWeek(message.into())
    }

    pub fn ambiguous_options(flags: Vec<String>) -> Self {
        Self::AmbiguousOptions(flags)
    }

    pub fn remote_rejected<B: Into<String>>(status: u16, body: B) -> Self {
        Self::RemoteRejected {
            status,
            body: body.into(),
        }
    }

    pub fn transport<M: Into<String>>(message: M) -> Self {
        Self::Transport(message.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidDate(_) => "invalid_date",
            Self::InvalidWeek(_) => "invalid_week",
            Self::AmbiguousOptions(_) => "ambiguous_options",
            Self::RemoteRejected { .. } => "remote_rejected",
            Self::Transport(_) => "transport_error",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::InvalidDate(message) => message.clone(),
            Self::InvalidWeek(message) => message.clone(),
            Self::AmbiguousOptions(flags) => format!(
                "Only one of the following flags can be specified: {}",
                flags.join(", ")
            ),
            Self::RemoteRejected { status, body } => format!("{}: {}", status, body),
            Self::Transport(message) => message.clone(),
        }
    }
}

impl fmt::Display for DcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code(), self.message())
    }
}

impl std::error::Error for DcError {}

/// Whether a banner reports success or failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// A transient message shown at the top of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            message: message.into(),
        }
    }

    /// Error banner for a failed action, with the server's reason when it gave one
    pub fn failure(action: &str, reason: Option<&str>) -> Self {
        match reason {
            Some(reason) if !reason.is_empty() => Self::error(format!("{}: {}", action, reason)),
            _ => Self::error(action),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            BannerKind::Success => "success-message show",
            BannerKind::Error => "success-message error show",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self.kind {
            BannerKind::Success => "fas fa-check-circle",
            BannerKind::Error => "fas fa-times-circle",
        }
    }
}

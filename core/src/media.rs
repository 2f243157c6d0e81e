use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classifies a declared MIME type by its top-level type only.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let (top, _) = mime.trim().split_once('/')?;
        if top.eq_ignore_ascii_case("image") {
            Some(MediaKind::Image)
        } else if top.eq_ignore_ascii_case("video") {
            Some(MediaKind::Video)
        } else {
            None
        }
    }
}

/// Background media shown behind the reveal window. Uploaded sources are
/// shared so state snapshots do not copy large data URLs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Media {
    #[default]
    Default,
    Image { src: Rc<str> },
    Video { src: Rc<str> },
}

impl Media {
    pub fn from_upload(kind: MediaKind, src: impl Into<Rc<str>>) -> Self {
        let src = src.into();
        match kind {
            MediaKind::Image => Media::Image { src },
            MediaKind::Video => Media::Video { src },
        }
    }

    pub fn kind(&self) -> Option<MediaKind> {
        match self {
            Media::Default => None,
            Media::Image { .. } => Some(MediaKind::Image),
            Media::Video { .. } => Some(MediaKind::Video),
        }
    }

    pub fn is_uploaded(&self) -> bool {
        !matches!(self, Media::Default)
    }

    pub fn uploaded_src(&self) -> Option<&Rc<str>> {
        match self {
            Media::Default => None,
            Media::Image { src } | Media::Video { src } => Some(src),
        }
    }
}

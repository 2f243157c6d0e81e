use crate::clip::ClipPolygon;
use crate::geometry::{clamp_center, Point, Size};
use crate::media::Media;
use crate::sizing::{SizePolicy, DEFAULT_DESKTOP_SIZE};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        offset: Point,
    },
}

impl DragState {
    pub fn is_dragging(self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

/// Inputs to the reveal view. Points are in container-local pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum RevealAction {
    BeginDrag { contact: Point },
    DragMove { pointer: Point, container: Size },
    EndDrag,
    Relayout { viewport: Size, container: Size },
    OpenUploadPrompt,
    CloseUploadPrompt,
    SetMedia(Media),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealState {
    pub center: Point,
    pub window_size: f64,
    pub container: Size,
    pub compact: bool,
    pub drag: DragState,
    pub media: Media,
    pub upload_prompt_open: bool,
    pub policy: SizePolicy,
}

impl Default for RevealState {
    fn default() -> Self {
        Self::new(SizePolicy::default())
    }
}

impl RevealState {
    pub fn new(policy: SizePolicy) -> Self {
        Self {
            center: Point::default(),
            window_size: DEFAULT_DESKTOP_SIZE,
            container: Size::default(),
            compact: false,
            drag: DragState::Idle,
            media: Media::Default,
            upload_prompt_open: false,
            policy,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Top-left corner of the frame in container-local pixels.
    pub fn frame_origin(&self) -> Point {
        let half = self.window_size * 0.5;
        Point::new(self.center.x - half, self.center.y - half)
    }

    pub fn clip_polygon(&self) -> ClipPolygon {
        ClipPolygon::around(self.center, self.window_size)
    }

    /// Applies one action, returning whether anything observable changed.
    pub fn apply(&mut self, action: RevealAction) -> bool {
        match action {
            RevealAction::BeginDrag { contact } => self.begin_drag(contact),
            RevealAction::DragMove { pointer, container } => self.drag_to(pointer, container),
            RevealAction::EndDrag => self.end_drag(),
            RevealAction::Relayout { viewport, container } => self.relayout(viewport, container),
            RevealAction::OpenUploadPrompt => self.set_upload_prompt(true),
            RevealAction::CloseUploadPrompt => self.set_upload_prompt(false),
            RevealAction::SetMedia(media) => self.set_media(media),
        }
    }

    pub fn begin_drag(&mut self, contact: Point) -> bool {
        let next = DragState::Dragging {
            offset: contact.offset_from(self.center),
        };
        if self.drag == next {
            return false;
        }
        self.drag = next;
        true
    }

    pub fn drag_to(&mut self, pointer: Point, container: Size) -> bool {
        let DragState::Dragging { offset } = self.drag else {
            return false;
        };
        self.container = container;
        let next = clamp_center(pointer.offset_from(offset), self.window_size, container);
        if next == self.center {
            return false;
        }
        self.center = next;
        true
    }

    pub fn end_drag(&mut self) -> bool {
        if !self.drag.is_dragging() {
            return false;
        }
        self.drag = DragState::Idle;
        true
    }

    pub fn relayout(&mut self, viewport: Size, container: Size) -> bool {
        let window_size = self.policy.window_size(viewport);
        let compact = self.policy.is_compact(viewport);
        let center = container.center();
        let changed = window_size != self.window_size
            || compact != self.compact
            || center != self.center
            || container != self.container;
        self.window_size = window_size;
        self.compact = compact;
        self.center = center;
        self.container = container;
        changed
    }

    pub fn set_media(&mut self, media: Media) -> bool {
        let changed = self.media != media || self.upload_prompt_open;
        self.media = media;
        self.upload_prompt_open = false;
        changed
    }

    fn set_upload_prompt(&mut self, open: bool) -> bool {
        if self.upload_prompt_open == open {
            return false;
        }
        self.upload_prompt_open = open;
        true
    }
}

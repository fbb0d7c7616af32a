use crate::models::LocalEntry;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use yew::Callback;

/// A part of a talk block that starts out as skeleton content and is
/// replaced by fetched content at most once.
#[derive(Debug, Clone, PartialEq)]
pub enum Region<T> {
    Skeleton,
    Enriched(T),
}

impl<T> Default for Region<T> {
    fn default() -> Self {
        Region::Skeleton
    }
}

impl<T> Region<T> {
    /// Returns false, leaving the region untouched, if it was already filled.
    pub fn fill(&mut self, value: T) -> bool {
        if self.is_enriched() {
            return false;
        }
        *self = Region::Enriched(value);
        true
    }

    pub fn is_enriched(&self) -> bool {
        matches!(self, Region::Enriched(_))
    }

    pub fn enriched(&self) -> Option<&T> {
        match self {
            Region::Enriched(value) => Some(value),
            Region::Skeleton => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TitleLink {
    pub href: String,
    pub title: String,
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetadataLine {
    pub speakers: String,
    pub series: String,
    pub duration: String,
}

pub type Paragraph = Vec<String>;

/// What the timeline hover handler needs: where to link, and how long the
/// talk is.
#[derive(Debug, Clone, PartialEq)]
pub struct SeekTarget {
    pub canonical_url: String,
    pub duration_seconds: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelinePreview {
    pub image_url: String,
    pub target: SeekTarget,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Regions {
    pub title: Region<TitleLink>,
    pub thumbnail: Region<String>,
    pub metadata: Region<MetadataLine>,
    pub description: Region<Vec<Paragraph>>,
    pub timeline: Region<TimelinePreview>,
}

impl Regions {
    pub fn is_skeleton(&self) -> bool {
        !(self.title.is_enriched()
            || self.thumbnail.is_enriched()
            || self.metadata.is_enriched()
            || self.description.is_enriched()
            || self.timeline.is_enriched())
    }
}

/// Handle to one entry's block. Created by [`ListRoot::append`], then written
/// to only by that entry's enrichment task.
///
/// Whichever card renders the block subscribes to it, so an update redraws
/// that card alone.
#[derive(Clone)]
pub struct Placeholder {
    entry: Rc<LocalEntry>,
    regions: Rc<RefCell<Regions>>,
    version: Rc<Cell<u32>>,
    subscriber: Rc<RefCell<Option<Callback<()>>>>,
}

impl PartialEq for Placeholder {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.regions, &other.regions)
    }
}

impl Placeholder {
    fn new(entry: LocalEntry) -> Self {
        Self {
            entry: Rc::new(entry),
            regions: Rc::default(),
            version: Rc::default(),
            subscriber: Rc::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.entry.id
    }

    pub fn entry(&self) -> Rc<LocalEntry> {
        self.entry.clone()
    }

    pub fn regions(&self) -> Regions {
        self.regions.borrow().clone()
    }

    /// Bumped by every [`Placeholder::update`].
    pub fn version(&self) -> u32 {
        self.version.get()
    }

    pub fn subscribe(&self, redraw: Callback<()>) {
        *self.subscriber.borrow_mut() = Some(redraw);
    }

    pub fn unsubscribe(&self) {
        self.subscriber.borrow_mut().take();
    }

    /// Applies `change` to the regions and redraws the subscribed card once.
    pub fn update(&self, change: impl FnOnce(&mut Regions)) {
        {
            let mut regions = self.regions.borrow_mut();
            change(&mut regions);
        }
        self.version.set(self.version.get().wrapping_add(1));

        let subscriber = self.subscriber.borrow().clone();
        if let Some(redraw) = subscriber {
            redraw.emit(());
        }
    }
}

/// The append-only list every talk block lives in. Its redraw hook fires
/// on appends only.
#[derive(Clone)]
pub struct ListRoot {
    blocks: Rc<RefCell<Vec<Placeholder>>>,
    redraw: Callback<()>,
}

impl ListRoot {
    pub fn new(redraw: Callback<()>) -> Self {
        Self {
            blocks: Rc::default(),
            redraw,
        }
    }

    /// Builds the skeleton block for `entry` and returns the handle its
    /// enrichment task writes through.
    pub fn append(&self, entry: LocalEntry) -> Placeholder {
        let placeholder = Placeholder::new(entry);
        self.blocks.borrow_mut().push(placeholder.clone());
        self.redraw.emit(());
        placeholder
    }

    pub fn len(&self) -> usize {
        self.blocks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn blocks(&self) -> Vec<Placeholder> {
        self.blocks.borrow().clone()
    }
}

impl Default for ListRoot {
    fn default() -> Self {
        Self::new(Callback::from(|_| ()))
    }
}

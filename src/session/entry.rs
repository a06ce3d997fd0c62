//! Entry operations
//!
//! The host starts a session through one of two entry points, one per place
//! the rename action is offered, and asks the matching scope predicate
//! whether to offer the action at all.

use log::info;

use crate::constants::{TITLE, VERSION};
use crate::errors::Result;
use crate::item::{ItemKind, Selection};
use crate::pattern::WildcardMode;
use crate::presets::PresetStore;
use crate::tokens::{ContextTokens, RunContext};

use super::engine::RenameSession;

const MEDIA_PANEL_KINDS: &[ItemKind] = &[
    ItemKind::Clip,
    ItemKind::Sequence,
    ItemKind::Desktop,
    ItemKind::Folder,
    ItemKind::Library,
    ItemKind::Reel,
    ItemKind::ReelGroup,
    ItemKind::Workspace,
];

// Transitions are allowed so a range selection of segments still qualifies;
// they are filtered out before renaming.
const TIMELINE_KINDS: &[ItemKind] = &[ItemKind::Clip, ItemKind::Segment, ItemKind::Transition];

/// Where the rename action was invoked from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Desktop and media panel items
    MediaPanel,
    /// Timeline segments
    Timeline,
}

impl Target {
    /// Contextual tokens offered for this target
    pub fn context_tokens(&self) -> ContextTokens {
        match self {
            Target::MediaPanel => ContextTokens::ColourSpace,
            Target::Timeline => ContextTokens::ShotName,
        }
    }

    /// Kinds a selection may contain for the action to be offered
    pub fn allowed_kinds(&self) -> &'static [ItemKind] {
        match self {
            Target::MediaPanel => MEDIA_PANEL_KINDS,
            Target::Timeline => TIMELINE_KINDS,
        }
    }

    /// Whether every kind in a raw selection is allowed for this target
    pub fn in_scope(&self, kinds: &[ItemKind]) -> bool {
        let allowed = self.allowed_kinds();
        kinds.iter().all(|kind| allowed.contains(kind))
    }

    /// Starts a session for this target
    pub fn start<'a>(
        &self,
        mut selection: Selection<'a>,
        context: &RunContext,
        store: PresetStore,
        mode: WildcardMode,
    ) -> Result<RenameSession<'a>> {
        if *self == Target::Timeline {
            selection.filter_kind(ItemKind::Transition);
        }
        info!("{TITLE} v{VERSION}");
        RenameSession::new(selection, context, self.context_tokens(), store, mode)
    }
}

/// Starts a session over a desktop or media panel selection
pub fn find_replace_media_panel<'a>(
    selection: Selection<'a>,
    context: &RunContext,
    store: PresetStore,
    mode: WildcardMode,
) -> Result<RenameSession<'a>> {
    Target::MediaPanel.start(selection, context, store, mode)
}

/// Starts a session over a timeline selection, leaving out transitions
pub fn find_replace_timeline<'a>(
    selection: Selection<'a>,
    context: &RunContext,
    store: PresetStore,
    mode: WildcardMode,
) -> Result<RenameSession<'a>> {
    Target::Timeline.start(selection, context, store, mode)
}

/// Whether the media panel action applies to a selection of these kinds
pub fn scope_selection_media_panel(kinds: &[ItemKind]) -> bool {
    Target::MediaPanel.in_scope(kinds)
}

/// Whether the timeline action applies to a selection of these kinds
pub fn scope_selection_timeline(kinds: &[ItemKind]) -> bool {
    Target::Timeline.in_scope(kinds)
}

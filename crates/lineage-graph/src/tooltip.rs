//! Hover tooltip placement.
//!
//! The anchor sits just below and to the right of the pointer, then gets
//! clamped so the tooltip box stays inside its container. `HoverState`
//! holds the current tooltip at the render boundary; the graph snapshot
//! itself never changes on hover.

use crate::role::Role;
use crate::snapshot::GraphSnapshot;
use lineage_core::{Address, LineageError, Result};
use serde::Serialize;
use tracing::debug;

/// Offset from the pointer to the tooltip's top-left corner.
pub const TOOLTIP_OFFSET: f64 = 16.0;

/// Minimum distance between the tooltip and the container edge.
pub const TOOLTIP_MARGIN: f64 = 12.0;

pub const TOOLTIP_WIDTH: f64 = 220.0;
pub const TOOLTIP_HEIGHT: f64 = 160.0;

/// Pointer position relative to the container's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

/// Size of the element the tooltip is positioned within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Anchor {
    pub left: f64,
    pub top: f64,
}

/// Computes the clamped top-left corner of the tooltip.
pub fn tooltip_anchor(pointer: Pointer, container: Container) -> Anchor {
    let max_left = (container.width - TOOLTIP_WIDTH).max(TOOLTIP_MARGIN);
    let max_top = (container.height - TOOLTIP_HEIGHT).max(TOOLTIP_MARGIN);

    Anchor {
        left: (pointer.x + TOOLTIP_OFFSET).max(TOOLTIP_MARGIN).min(max_left),
        top: (pointer.y + TOOLTIP_OFFSET).max(TOOLTIP_MARGIN).min(max_top),
    }
}

/// Everything the renderer needs to draw a tooltip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub anchor: Anchor,
    pub role: Role,
    pub title: &'static str,
    pub description: &'static str,
    pub label: String,
    pub address: Address,
    pub display_title: String,
}

impl Tooltip {
    /// Builds the tooltip for a hovered address.
    pub fn for_address(
        snapshot: &GraphSnapshot,
        address: &str,
        pointer: Pointer,
        container: Container,
    ) -> Result<Self> {
        let node = snapshot
            .node(address)
            .ok_or_else(|| LineageError::UnknownAddress(address.to_string()))?;
        let info = node.role.info();

        Ok(Self {
            anchor: tooltip_anchor(pointer, container),
            role: node.role,
            title: info.title,
            description: info.description,
            label: snapshot.label(address).unwrap_or_default().to_string(),
            address: node.address.clone(),
            display_title: node.display_title.clone(),
        })
    }
}

/// Pointer events forwarded by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    Enter { address: Address, pointer: Pointer },
    Move { address: Address, pointer: Pointer },
    Leave,
}

/// Transient hover state, owned by the render layer.
#[derive(Debug, Clone, Default)]
pub struct HoverState {
    current: Option<Tooltip>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a pointer event and returns the tooltip to show, if any.
    ///
    /// Enter and move recompute the tooltip; leave clears it. An unknown
    /// address clears the tooltip and reports the error.
    pub fn handle(
        &mut self,
        snapshot: &GraphSnapshot,
        event: PointerEvent,
        container: Container,
    ) -> Result<Option<&Tooltip>> {
        match event {
            PointerEvent::Enter { address, pointer } | PointerEvent::Move { address, pointer } => {
                match Tooltip::for_address(snapshot, &address, pointer, container) {
                    Ok(tooltip) => self.current = Some(tooltip),
                    Err(e) => {
                        self.current = None;
                        return Err(e);
                    }
                }
            }
            PointerEvent::Leave => {
                debug!("Pointer left node, clearing tooltip");
                self.current = None;
            }
        }
        Ok(self.current.as_ref())
    }

    pub fn current(&self) -> Option<&Tooltip> {
        self.current.as_ref()
    }
}

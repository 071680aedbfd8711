//! Chart renderers and the kind → renderer dispatch.
//!
//! Every renderer is a pure function `(&[Record], &RenderConfig) -> Artifact`.

pub mod area;
pub mod artifact;
pub mod axis;
pub mod bar;
pub mod canvas;
pub mod charset;
pub mod labels;
pub mod pie;
pub mod vertical_bar;

pub use artifact::{Artifact, Chart, LegendEntry, PreconditionError};
pub use canvas::Canvas;

use tracing::debug;

use crate::config::RenderConfig;
use crate::types::{ChartKind, Record};

/// Render `data` as the chart `kind`.
///
/// An empty dataset yields [`Artifact::Empty`]; the renderers themselves
/// always see at least one record.
pub fn render(kind: ChartKind, data: &[Record], config: &RenderConfig) -> Artifact {
    if data.is_empty() {
        debug!(%kind, "empty dataset, nothing to render");
        return Artifact::Empty;
    }
    debug!(%kind, records = data.len(), "rendering chart");
    match kind {
        ChartKind::Bar => bar::render(data, config),
        ChartKind::VerticalBar => vertical_bar::render(data, config),
        ChartKind::Area => area::render(data, config),
        ChartKind::Pie => pie::render(data, config),
    }
}

/// Round with ties going up: `2.5 → 3`, `-2.5 → -2`.
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// `value / max`, or 0 when there is no maximum to scale against.
pub(crate) fn ratio(value: f64, max: f64) -> f64 {
    if max == 0.0 { 0.0 } else { value / max }
}

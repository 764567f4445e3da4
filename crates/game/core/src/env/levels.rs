//! Level interpolation over archetype anchors.

use super::catalog::{ArchetypeDefinition, CatalogError};
use crate::stats::{Combatant, StatBlock};

/// Resolve the stats of an archetype at `requested_level`.
///
/// # Rules
///
/// ```text
/// exact anchor      → that anchor, effective level = requested
/// below / above     → boundary anchor, effective level = boundary
/// between lo and hi → t = (L - lo) / (hi - lo), field = lo + (hi - lo) * t
/// ```
///
/// Negative or out-of-range levels are clamped rather than rejected.
///
/// # Errors
///
/// [`CatalogError::NoAnchorsDefined`] when the archetype has no anchors.
pub fn resolve_level(
    archetype: &ArchetypeDefinition,
    requested_level: i32,
) -> Result<(u32, StatBlock), CatalogError> {
    let anchors = &archetype.anchors;
    let no_anchors = || CatalogError::NoAnchorsDefined {
        key: archetype.key.clone(),
    };

    let (&lowest, lowest_stats) = anchors.first_key_value().ok_or_else(no_anchors)?;
    let (&highest, highest_stats) = anchors.last_key_value().ok_or_else(no_anchors)?;

    if requested_level <= lowest as i32 {
        return Ok((lowest, *lowest_stats));
    }
    if requested_level >= highest as i32 {
        return Ok((highest, *highest_stats));
    }

    let level = requested_level as u32;
    if let Some(stats) = anchors.get(&level) {
        return Ok((level, *stats));
    }

    // lowest < level < highest, so both brackets exist.
    let (&lo_level, lo_stats) = anchors.range(..level).next_back().ok_or_else(no_anchors)?;
    let (&hi_level, hi_stats) = anchors.range(level..).next().ok_or_else(no_anchors)?;

    let t = f64::from(level - lo_level) / f64::from(hi_level - lo_level);
    Ok((level, StatBlock::lerp(lo_stats, hi_stats, t)))
}

/// Materialize a non-player combatant at full pools.
///
/// The default instance name is `"{display_name} (Lvl {effective_level})"`.
pub fn spawn_combatant(
    archetype: &ArchetypeDefinition,
    requested_level: i32,
    instance_name: Option<&str>,
) -> Result<(u32, Combatant), CatalogError> {
    let (level, stats) = resolve_level(archetype, requested_level)?;
    let name = match instance_name {
        Some(name) => name.to_string(),
        None => format!("{} (Lvl {})", archetype.display_name, level),
    };
    Ok((level, Combatant::non_player(name, &stats)))
}

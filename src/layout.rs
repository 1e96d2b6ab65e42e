use crate::error::{DuotileError, DuotileResult};

/// Horizontal separation between the two image centers in the overlay
/// layouts, as a fraction of the padded inner width.
pub const OVERLAY_OFFSET_RATIO: f64 = 0.16;

/// Default secondary-to-hero height ratio for the hero overlay.
pub const HERO_SCALE_RATIO: f64 = 0.75;

/// Full configuration for one composition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutSpec {
    /// Square output edge length in pixels.
    pub canvas_size: u32,
    /// Empty margin on all four sides, as a fraction of the canvas size.
    pub padding_ratio: f64,
    pub kind: LayoutKind,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum LayoutKind {
    /// Both images at one shared scale, left and right of a gap.
    SideBySide {
        /// Horizontal space between the two images, as a fraction of the
        /// canvas width.
        gap_ratio: f64,
    },
    /// Both images at one shared scale, centers pushed apart by a fixed
    /// fraction of the inner width; the second input draws in front.
    OverlayEqual,
    /// One image large and behind (the hero), the other smaller, shifted
    /// sideways and dropped toward the hero's bottom edge, always in front.
    OverlayHero {
        /// Signed shift of the secondary's center away from the hero's
        /// center, as a fraction of the hero's resized half-width. May
        /// exceed 1.0 in either direction to clear the hero's silhouette.
        offset_ratio: f64,
        /// Secondary height as a fraction of the hero's resized height.
        scale_ratio: f64,
        /// Extra downward drop of the secondary below the hero's bottom
        /// edge, as a fraction of the canvas size.
        drop_ratio: f64,
        anchor: HeroAnchor,
        hero: HeroSlot,
    },
}

/// Vertical anchoring of the hero inside the padded area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum HeroAnchor {
    /// Hero centered in the canvas.
    Center,
    /// Hero resting on the bottom padding edge, for grounded compositions.
    Bottom,
}

/// Which caller-supplied slot plays the hero role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum HeroSlot {
    First,
    Second,
}

impl LayoutSpec {
    /// Reject specs no layout could make sense of. Degenerate-but-finite
    /// geometry (e.g. padding eating the whole canvas) is not rejected
    /// here; the solver degrades it instead.
    pub fn validate(&self) -> DuotileResult<()> {
        if self.canvas_size == 0 {
            return Err(DuotileError::validation("canvas size must be > 0"));
        }
        ensure_ratio("padding_ratio", self.padding_ratio)?;
        match self.kind {
            LayoutKind::SideBySide { gap_ratio } => ensure_ratio("gap_ratio", gap_ratio)?,
            LayoutKind::OverlayEqual => {}
            LayoutKind::OverlayHero {
                offset_ratio,
                scale_ratio,
                drop_ratio,
                ..
            } => {
                if !offset_ratio.is_finite() {
                    return Err(DuotileError::validation("offset_ratio must be finite"));
                }
                ensure_ratio("scale_ratio", scale_ratio)?;
                ensure_ratio("drop_ratio", drop_ratio)?;
            }
        }
        Ok(())
    }
}

fn ensure_ratio(name: &str, value: f64) -> DuotileResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(DuotileError::validation(format!(
            "{name} must be a non-negative finite number, got {value}"
        )));
    }
    Ok(())
}

/// Final size and position of one source raster on the canvas. Coordinates
/// are the top-left corner and may lie outside the canvas; the paste clips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub width: u32,
    pub height: u32,
    pub x: i64,
    pub y: i64,
}

impl Placement {
    pub fn right(&self) -> i64 {
        self.x + i64::from(self.width)
    }

    pub fn bottom(&self) -> i64 {
        self.y + i64::from(self.height)
    }
}

/// Placements for both input slots plus the back-to-front draw order.
/// `slots[0]` always describes the first input, `slots[1]` the second,
/// regardless of which one ends up in front.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutPlan {
    pub slots: [Placement; 2],
    pub draw_order: [usize; 2],
}

/// Compute scale and placement for two source rasters of the given pixel
/// dimensions. Pure geometry: no pixels are touched, and identical inputs
/// always produce identical plans.
pub fn plan_layout(
    spec: &LayoutSpec,
    first: (u32, u32),
    second: (u32, u32),
) -> DuotileResult<LayoutPlan> {
    spec.validate()?;
    let plan = match spec.kind {
        LayoutKind::SideBySide { gap_ratio } => {
            plan_side_by_side(spec.canvas_size, spec.padding_ratio, gap_ratio, first, second)
        }
        LayoutKind::OverlayEqual => {
            plan_overlay_equal(spec.canvas_size, spec.padding_ratio, first, second)
        }
        LayoutKind::OverlayHero {
            offset_ratio,
            scale_ratio,
            drop_ratio,
            anchor,
            hero,
        } => plan_overlay_hero(
            spec.canvas_size,
            spec.padding_ratio,
            offset_ratio,
            scale_ratio,
            drop_ratio,
            anchor,
            hero,
            first,
            second,
        ),
    };
    Ok(plan)
}

fn plan_side_by_side(
    size: u32,
    padding_ratio: f64,
    gap_ratio: f64,
    (w1, h1): (u32, u32),
    (w2, h2): (u32, u32),
) -> LayoutPlan {
    let gap = ratio_px(size, gap_ratio);
    let padding = ratio_px(size, padding_ratio);

    // Either of these can go to zero or below for extreme ratios; the
    // scale clamp below turns that into 1px placeholders instead of a
    // failure.
    let avail_w = (i64::from(size) - 2 * padding - gap) as f64;
    let avail_h = (i64::from(size) - 2 * padding) as f64;

    // One shared scale: each image must fit the available height on its
    // own, and the pair laid end to end must fit the available width.
    let s_height = fit(avail_h, h1).min(fit(avail_h, h2));
    let width_sum = u64::from(w1) + u64::from(w2);
    let s_width = if width_sum > 0 {
        avail_w / width_sum as f64
    } else {
        s_height
    };
    let s = s_height.min(s_width).max(0.0);

    let (nw1, nh1) = (scaled_dim(w1, s), scaled_dim(h1, s));
    let (nw2, nh2) = (scaled_dim(w2, s), scaled_dim(h2, s));

    let total_w = i64::from(nw1) + gap + i64::from(nw2);
    let x1 = (i64::from(size) - total_w) / 2;
    let x2 = x1 + i64::from(nw1) + gap;

    // The pair shares one bounding box, centered vertically, with both
    // bottoms on its lower edge.
    let pair_h = nh1.max(nh2);
    let top = (i64::from(size) - i64::from(pair_h)) / 2;
    let bottom = top + i64::from(pair_h);

    LayoutPlan {
        slots: [
            Placement {
                width: nw1,
                height: nh1,
                x: x1,
                y: bottom - i64::from(nh1),
            },
            Placement {
                width: nw2,
                height: nh2,
                x: x2,
                y: bottom - i64::from(nh2),
            },
        ],
        draw_order: [0, 1],
    }
}

fn plan_overlay_equal(
    size: u32,
    padding_ratio: f64,
    (w1, h1): (u32, u32),
    (w2, h2): (u32, u32),
) -> LayoutPlan {
    let padding = ratio_px(size, padding_ratio);
    let inner = (i64::from(size) - 2 * padding) as f64;

    let offset = (inner.max(0.0) * OVERLAY_OFFSET_RATIO).round() as i64;

    // Shared scale from whichever source is taller/wider, leaving room for
    // the center separation.
    let s_height = fit(inner, h1.max(h2));
    let s_width = fit(inner - offset as f64, w1.max(w2));
    let s = s_height.min(s_width).max(0.0);

    let (nw1, nh1) = (scaled_dim(w1, s), scaled_dim(h1, s));
    let (nw2, nh2) = (scaled_dim(w2, s), scaled_dim(h2, s));

    let c = i64::from(size) / 2;

    LayoutPlan {
        slots: [
            Placement {
                width: nw1,
                height: nh1,
                x: c - i64::from(nw1) / 2 - offset / 2,
                y: c - i64::from(nh1) / 2,
            },
            Placement {
                width: nw2,
                height: nh2,
                x: c - i64::from(nw2) / 2 + offset / 2,
                y: c - i64::from(nh2) / 2,
            },
        ],
        // Fixed order: the second input is always the front layer.
        draw_order: [0, 1],
    }
}

#[allow(clippy::too_many_arguments)]
fn plan_overlay_hero(
    size: u32,
    padding_ratio: f64,
    offset_ratio: f64,
    scale_ratio: f64,
    drop_ratio: f64,
    anchor: HeroAnchor,
    hero: HeroSlot,
    first: (u32, u32),
    second: (u32, u32),
) -> LayoutPlan {
    let padding = ratio_px(size, padding_ratio);
    let inner = (i64::from(size) - 2 * padding) as f64;

    let ((hw, hh), (sw, sh)) = match hero {
        HeroSlot::First => (first, second),
        HeroSlot::Second => (second, first),
    };

    // Hero fills the padded inner square, aspect preserved.
    let hero_scale = fit(inner, hw).min(fit(inner, hh)).max(0.0);
    let hero_w = scaled_dim(hw, hero_scale);
    let hero_h = scaled_dim(hh, hero_scale);

    // The secondary is sized against the hero's on-canvas height, not its
    // own pixel size.
    let sec_scale = (f64::from(hero_h) * scale_ratio) / f64::from(sh.max(1));
    let sec_w = scaled_dim(sw, sec_scale);
    let sec_h = scaled_dim(sh, sec_scale);

    let hero_x = (i64::from(size) - i64::from(hero_w)) / 2;
    let hero_y = match anchor {
        HeroAnchor::Center => (i64::from(size) - i64::from(hero_h)) / 2,
        HeroAnchor::Bottom => i64::from(size) - padding - i64::from(hero_h),
    };
    let hero_bottom = hero_y + i64::from(hero_h);

    // Signed center shift in units of the hero's half-width, so offsets
    // beyond +/-1.0 place the secondary outside the hero's silhouette.
    let hero_cx = hero_x + i64::from(hero_w) / 2;
    let sec_cx = hero_cx + (offset_ratio * f64::from(hero_w) / 2.0).round() as i64;
    let mut sec_x = sec_cx - i64::from(sec_w) / 2;
    // Soft clamp into the padding box; the left edge wins when the
    // secondary is too wide to fit at all.
    sec_x = sec_x.min(i64::from(size) - padding - i64::from(sec_w)).max(padding);

    // Bottom-align to the hero, then drop further down; the secondary may
    // intrude into the bottom padding but never passes the canvas edge.
    let drop = ratio_px(size, drop_ratio);
    let mut sec_y = hero_bottom + drop - i64::from(sec_h);
    sec_y = sec_y.min(i64::from(size) - i64::from(sec_h));

    let hero_placement = Placement {
        width: hero_w,
        height: hero_h,
        x: hero_x,
        y: hero_y,
    };
    let sec_placement = Placement {
        width: sec_w,
        height: sec_h,
        x: sec_x,
        y: sec_y,
    };

    // Hero draws first, secondary always in front, whichever slot the hero
    // came from.
    match hero {
        HeroSlot::First => LayoutPlan {
            slots: [hero_placement, sec_placement],
            draw_order: [0, 1],
        },
        HeroSlot::Second => LayoutPlan {
            slots: [sec_placement, hero_placement],
            draw_order: [1, 0],
        },
    }
}

fn ratio_px(size: u32, ratio: f64) -> i64 {
    (f64::from(size) * ratio).round() as i64
}

/// Scale that fits `dim` into `avail` pixels. Zero source dimensions fall
/// back to a 1px denominator so the division stays defined.
fn fit(avail: f64, dim: u32) -> f64 {
    avail / f64::from(dim.max(1))
}

/// Resized dimension, floored at one pixel so downstream resizes stay
/// well-defined even when the scale collapses.
fn scaled_dim(dim: u32, scale: f64) -> u32 {
    let scaled = (f64::from(dim) * scale).round();
    if scaled < 1.0 { 1 } else { scaled as u32 }
}

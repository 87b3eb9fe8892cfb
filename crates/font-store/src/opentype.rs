//! One-way import of TrueType/OpenType binaries into a [`MathFont`].

use std::collections::{BTreeMap, BTreeSet};

use kurbo::Affine;
use log::{debug, info, warn};
use read_fonts::{
    FontRef, TableProvider,
    tables::{
        glyf::{self, Glyf},
        gsub::{Gsub, SingleSubst, SubstitutionSubtables},
        layout::CoverageTable,
        loca::Loca,
    },
    types::{GlyphId, GlyphId16, Tag},
};

use crate::{BoundingBox, Contour, FontStore, Glyph, MathFont, OutlinePoint, Result};

const MATH: Tag = Tag::new(b"MATH");

/// Build a font model from TrueType/OpenType data.
///
/// Outlines come from `glyf`, with composite glyphs flattened into plain
/// contours; CFF-flavored fonts import with empty outlines and zero boxes. An existing `MATH` table is not decoded.
pub fn import(data: &[u8]) -> Result<MathFont> {
    let font = FontRef::new(data)?;
    let head = font.head()?;
    let num_glyphs = font.maxp()?.num_glyphs();

    let default_stroke_width =
        font.post().map(|post| i32::from(post.underline_thickness().to_i16())).unwrap_or(0);
    let mut model = MathFont::new(head.units_per_em(), default_stroke_width);
    if let Some(x_height) = font.os2().ok().and_then(|os2| os2.sx_height()).filter(|h| *h > 0) {
        model = model.with_x_height(i32::from(x_height));
    }

    if font.table_data(MATH).is_some() {
        warn!("MATH table present but not decoded; the model starts without math data");
    }

    let codepoints = Codepoints::from_font(&font);
    let substitutions = font.gsub().map(|gsub| covered_subtables(&gsub)).unwrap_or_default();
    let outlines = font.glyf().ok().zip(font.loca(None).ok());
    let hmtx = font.hmtx().ok();
    let post = font.post().ok();

    for gid in 0..num_glyphs {
        let glyph_id = GlyphId::new(u32::from(gid));
        let name = post
            .as_ref()
            .and_then(|post| post.glyph_name(GlyphId16::new(gid)))
            .map(str::to_string)
            .unwrap_or_else(|| format!("gid{gid}"));
        let name = if model.glyph_by_name(&name).is_some() { format!("{name}#{gid}") } else { name };

        let (bbox, contours) = match &outlines {
            Some((glyf, loca)) => match loca.get_glyf(glyph_id, glyf) {
                Ok(Some(glyph)) => read_outline(&glyph, glyf, loca),
                Ok(None) => (BoundingBox::default(), Vec::new()),
                Err(e) => {
                    debug!("Skipping outline of glyph {gid}: {e}");
                    (BoundingBox::default(), Vec::new())
                }
            },
            None => (BoundingBox::default(), Vec::new()),
        };
        let advance = hmtx.as_ref().and_then(|h| h.advance(glyph_id)).unwrap_or(0);

        let mut codes = codepoints.for_glyph(gid).into_iter();
        let mut glyph = Glyph::new(name.clone(), codes.next(), bbox)
            .with_advance_width(i32::from(advance))
            .with_contours(contours);
        glyph.substitutions = substitutions.get(&gid).cloned().unwrap_or_default();
        model.insert_glyph(glyph)?;

        for alias in codes {
            model.encode(alias, &name)?;
        }
    }

    info!("Imported {} glyphs ({} encoded)", model.glyph_count(), codepoints.len());
    Ok(model)
}

/// Nesting limit for composite glyphs; deeper (or cyclic) references are dropped.
const MAX_COMPONENT_DEPTH: u8 = 16;

fn read_outline(glyph: &glyf::Glyph, glyf: &Glyf<'_>, loca: &Loca<'_>) -> (BoundingBox, Vec<Contour>) {
    let (x_min, y_min, x_max, y_max) = match glyph {
        glyf::Glyph::Simple(g) => (g.x_min(), g.y_min(), g.x_max(), g.y_max()),
        glyf::Glyph::Composite(g) => (g.x_min(), g.y_min(), g.x_max(), g.y_max()),
    };
    let bbox = BoundingBox::new(
        i32::from(x_min),
        i32::from(y_min),
        i32::from(x_max),
        i32::from(y_max),
    );
    (bbox, flatten(glyph, glyf, loca, 0))
}

/// Contours of a glyph with composite components resolved in place.
fn flatten(glyph: &glyf::Glyph, glyf: &Glyf<'_>, loca: &Loca<'_>, depth: u8) -> Vec<Contour> {
    match glyph {
        glyf::Glyph::Simple(simple) => simple_contours(simple),
        glyf::Glyph::Composite(composite) => {
            if depth >= MAX_COMPONENT_DEPTH {
                warn!("Composite nesting deeper than {MAX_COMPONENT_DEPTH}; outline truncated");
                return Vec::new();
            }
            let mut contours = Vec::new();
            for component in composite.components() {
                let component_id = GlyphId::from(component.glyph);
                let Ok(Some(child)) = loca.get_glyf(component_id, glyf) else {
                    continue;
                };
                let (dx, dy) = match component.anchor {
                    glyf::Anchor::Offset { x, y } => (f64::from(x), f64::from(y)),
                    glyf::Anchor::Point { .. } => {
                        debug!("Point-matched component {component_id:?} placed at its origin");
                        (0.0, 0.0)
                    }
                };
                let t = component.transform;
                let affine = Affine::new([
                    f64::from(t.xx.to_f32()),
                    f64::from(t.yx.to_f32()),
                    f64::from(t.xy.to_f32()),
                    f64::from(t.yy.to_f32()),
                    dx,
                    dy,
                ]);
                contours.extend(
                    flatten(&child, glyf, loca, depth + 1).iter().map(|c| c.transform(affine)),
                );
            }
            contours
        }
    }
}

fn simple_contours(simple: &glyf::SimpleGlyph) -> Vec<Contour> {
    let points: Vec<_> = simple
        .points()
        .map(|p| OutlinePoint::new(i32::from(p.x), i32::from(p.y), p.on_curve))
        .collect();

    let mut contours = Vec::new();
    let mut start = 0usize;
    for end in simple.end_pts_of_contours() {
        let end = usize::from(end.get()) + 1;
        if end > points.len() || end < start {
            break;
        }
        contours.push(Contour::from(points[start..end].to_vec()));
        start = end;
    }
    contours
}

/// cmap contents grouped by glyph.
struct Codepoints(BTreeMap<u16, BTreeSet<u32>>);

impl Codepoints {
    fn from_font(font: &FontRef) -> Self {
        let mut by_glyph: BTreeMap<u16, BTreeSet<u32>> = BTreeMap::new();
        if let Ok(cmap) = font.cmap() {
            let mut seen = BTreeSet::new();
            for (codepoint, gid) in cmap
                .encoding_records()
                .iter()
                .filter_map(|r| r.subtable(cmap.offset_data()).ok())
                .flat_map(|st| st.iter().collect::<Vec<_>>())
            {
                // The first subtable wins when two disagree.
                if gid.to_u32() != 0 && seen.insert(codepoint) {
                    by_glyph.entry(gid.to_u32() as u16).or_default().insert(codepoint);
                }
            }
        }
        Self(by_glyph)
    }

    fn for_glyph(&self, gid: u16) -> Vec<u32> {
        self.0.get(&gid).map(|set| set.iter().copied().collect()).unwrap_or_default()
    }

    fn len(&self) -> usize {
        self.0.values().map(BTreeSet::len).sum()
    }
}

/// Identifiers of the GSUB subtables covering each glyph.
///
/// Identifiers read `'<feature>' lookup <index> subtable <index>`, so a
/// feature tag can be matched as a substring.
fn covered_subtables(gsub: &Gsub) -> BTreeMap<u16, Vec<String>> {
    let mut covered: BTreeMap<u16, Vec<String>> = BTreeMap::new();
    let (Ok(feature_list), Ok(lookup_list)) = (gsub.feature_list(), gsub.lookup_list()) else {
        return covered;
    };

    for record in feature_list.feature_records() {
        let tag = record.feature_tag();
        let Ok(feature) = record.feature(feature_list.offset_data()) else {
            continue;
        };
        for lookup_index in feature.lookup_list_indices().iter().map(|i| i.get()) {
            let Ok(lookup) = lookup_list.lookups().get(usize::from(lookup_index)) else {
                continue;
            };
            let Ok(subtables) = lookup.subtables() else {
                continue;
            };
            for (sub_index, coverage) in subtable_coverages(subtables).into_iter().enumerate() {
                let id = format!("'{tag}' lookup {lookup_index} subtable {sub_index}");
                for gid in coverage_glyphs(&coverage) {
                    let entry = covered.entry(gid).or_default();
                    if !entry.contains(&id) {
                        entry.push(id.clone());
                    }
                }
            }
        }
    }
    covered
}

fn subtable_coverages(subtables: SubstitutionSubtables<'_>) -> Vec<CoverageTable<'_>> {
    match subtables {
        SubstitutionSubtables::Single(tables) => tables
            .iter()
            .flatten()
            .filter_map(|table| match table {
                SingleSubst::Format1(fmt) => fmt.coverage().ok(),
                SingleSubst::Format2(fmt) => fmt.coverage().ok(),
            })
            .collect(),
        SubstitutionSubtables::Multiple(tables) => {
            tables.iter().flatten().filter_map(|t| t.coverage().ok()).collect()
        }
        SubstitutionSubtables::Alternate(tables) => {
            tables.iter().flatten().filter_map(|t| t.coverage().ok()).collect()
        }
        SubstitutionSubtables::Ligature(tables) => {
            tables.iter().flatten().filter_map(|t| t.coverage().ok()).collect()
        }
        _ => Vec::new(),
    }
}

fn coverage_glyphs(coverage: &CoverageTable<'_>) -> Vec<u16> {
    match coverage {
        CoverageTable::Format1(f) => {
            f.glyph_array().iter().map(|g| g.get().to_u32() as u16).collect()
        }
        CoverageTable::Format2(f) => f
            .range_records()
            .iter()
            .flat_map(|r| {
                let start = r.start_glyph_id().to_u32() as u16;
                let end = r.end_glyph_id().to_u32() as u16;
                start..=end
            })
            .collect(),
    }
}

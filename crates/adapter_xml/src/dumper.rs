//! Writes a [`StressTestCollection`] back to a stress test document.
//!
//! Sections are written in [`layout::DUMP_ORDER`] and only when they have
//! entries. Entries follow key order.

use pricer_risk::{ShiftSpecRef, StressTestCase, StressTestCollection, VolCubeShiftSpec};
use tracing::debug;

use crate::document::XmlNode;
use crate::error::XmlError;
use crate::layout::{self, SectionLayout};
use crate::values;

/// Builds the `StressTesting` element for `collection`.
///
/// Every stress test must have a non-empty label. The model already rejects
/// empty keys and unset shift types where a section requires one, so any
/// other collection loads back unchanged.
///
/// # Examples
///
/// ```
/// use adapter_xml::dumper::dump;
/// use pricer_risk::{StressTestCase, StressTestCollection};
///
/// let collection: StressTestCollection = vec![StressTestCase::new("base")].into_iter().collect();
/// let root = dump(&collection);
/// assert_eq!(root.name(), "StressTesting");
/// assert_eq!(root.children()[0].attribute("id"), Some("base"));
/// ```
pub fn dump(collection: &StressTestCollection) -> XmlNode {
    let mut root = XmlNode::new(layout::ROOT);
    for case in collection {
        root.add_child(dump_case(case));
    }
    root
}

/// Serialises `collection` as XML text with `indent` spaces per level.
pub fn dump_to_string(
    collection: &StressTestCollection,
    indent: usize,
) -> Result<String, XmlError> {
    dump(collection).to_xml_string(indent)
}

fn dump_case(case: &StressTestCase) -> XmlNode {
    let mut node = XmlNode::new(layout::STRESS_TEST).with_attribute(layout::ID, case.label());

    for section in SectionLayout::dump_order() {
        let entries = case.shifts(section.class);
        if entries.is_empty() {
            continue;
        }
        debug!(
            label = case.label(),
            section = section.section,
            entries = entries.len(),
            "writing section"
        );
        let section_node = node.add_child(XmlNode::new(section.section));
        for (key, spec) in entries {
            section_node.add_child(dump_entry(section, key, spec));
        }
    }
    node
}

fn dump_entry(section: &SectionLayout, key: &str, spec: ShiftSpecRef<'_>) -> XmlNode {
    let node = XmlNode::new(section.element).with_attribute(section.key_attribute, key);
    match spec {
        ShiftSpecRef::Curve(curve) => node
            .with_child(text_node(layout::SHIFT_TYPE, curve.shift_type().as_str()))
            .with_child(text_node(
                layout::SHIFTS,
                values::format_compact_reals(curve.shifts()),
            ))
            .with_child(text_node(
                layout::SHIFT_TENORS,
                values::format_periods(curve.tenors()),
            )),
        ShiftSpecRef::Spot(spot) => node
            .with_child(text_node(layout::SHIFT_TYPE, spot.shift_type().as_str()))
            .with_child(text_node(
                layout::SHIFT_SIZE,
                values::format_real(spot.shift_size()),
            )),
        ShiftSpecRef::Vol(vol) => {
            let mut node = node;
            if let Some(shift_type) = vol.shift_type() {
                node.add_child(text_node(layout::SHIFT_TYPE, shift_type.as_str()));
            }
            node.with_child(text_node(
                layout::SHIFTS,
                values::format_compact_reals(vol.shifts()),
            ))
            .with_child(text_node(
                layout::SHIFT_EXPIRIES,
                values::format_periods(vol.expiries()),
            ))
        }
        ShiftSpecRef::VolCube(cube) => dump_cube(node, cube),
    }
}

fn dump_cube(node: XmlNode, cube: &VolCubeShiftSpec) -> XmlNode {
    let mut shifts = XmlNode::new(layout::SHIFTS).with_child(text_node(
        layout::SHIFT,
        values::format_real(cube.parallel_shift()),
    ));
    for ((expiry, term), shift) in cube.grid_shifts() {
        shifts.add_child(
            XmlNode::new(layout::SHIFT)
                .with_attribute(layout::EXPIRY, expiry.to_string())
                .with_attribute(layout::TERM, term.to_string())
                .with_text(values::format_real(*shift)),
        );
    }

    node.with_child(text_node(layout::SHIFT_TYPE, cube.shift_type().as_str()))
        .with_child(text_node(
            layout::SHIFT_TERMS,
            values::format_periods(cube.terms()),
        ))
        .with_child(text_node(
            layout::SHIFT_EXPIRIES,
            values::format_periods(cube.expiries()),
        ))
        .with_child(shifts)
}

fn text_node(name: &str, text: impl Into<String>) -> XmlNode {
    XmlNode::new(name).with_text(text)
}

//! Builds a [`StressTestCollection`] from a stress test document.
//!
//! Every entry is validated as it is read, so a collection returned by
//! [`load`] satisfies all model invariants.

use pricer_core::types::Period;
use pricer_risk::{
    CurveShiftSpec, ShiftShape, ShiftSpec, ShiftSpecError, ShiftType, SpotShiftSpec,
    StressTestCase, StressTestCollection, VolCubeShiftSpec, VolShiftSpec,
};
use tracing::{debug, info, warn};

use crate::document::XmlNode;
use crate::error::{ErrorContext, LoadError};
use crate::layout::{self, SectionLayout};
use crate::values;

/// Loads every `StressTest` under the `StressTesting` element.
///
/// `root` may be the `StressTesting` element itself or a node that has it
/// as a direct child. Stress tests are returned in document order.
///
/// # Errors
///
/// Returns the first [`LoadError`] met; nothing is returned on failure.
pub fn load(root: &XmlNode) -> Result<StressTestCollection, LoadError> {
    let result = load_collection(root);
    if let Err(err) = &result {
        let context = err.context();
        warn!(
            label = context.and_then(|c| c.label.as_deref()),
            section = context.and_then(|c| c.section),
            key = context.and_then(|c| c.key.as_deref()),
            error = %err,
            "failed to load stress tests"
        );
    }
    result
}

/// Parses `xml` and loads it with [`load`].
pub fn load_str(xml: &str) -> Result<StressTestCollection, LoadError> {
    let root = XmlNode::parse(xml).map_err(|err| {
        warn!(error = %err, "failed to parse stress test document");
        LoadError::from(err)
    })?;
    load(&root)
}

fn load_collection(root: &XmlNode) -> Result<StressTestCollection, LoadError> {
    let node = root
        .locate(layout::ROOT)
        .ok_or_else(|| LoadError::MissingRequiredSection {
            section: layout::ROOT,
            context: ErrorContext::default(),
        })?;

    let mut collection = StressTestCollection::new();
    for test in node.children_named(layout::STRESS_TEST) {
        let case = load_case(test)?;
        info!(
            label = case.label(),
            shifts = case.total_shifts(),
            "loaded stress test"
        );
        collection.push(case);
    }
    info!(count = collection.len(), "loading stress tests done");
    Ok(collection)
}

fn load_case(node: &XmlNode) -> Result<StressTestCase, LoadError> {
    let label = node
        .attribute(layout::ID)
        .ok_or_else(|| LoadError::MissingAttribute {
            element: layout::STRESS_TEST,
            attribute: layout::ID,
            context: ErrorContext::default(),
        })?;
    let mut case = StressTestCase::new(label);

    for section in SectionLayout::all() {
        let Some(section_node) = node.child(section.section) else {
            continue;
        };
        debug!(label, section = section.section, "loading section");
        let section_context = ErrorContext::stress_test(label).with_section(section.section);

        for entry in section_node.children_named(section.element) {
            let key = entry.attribute(section.key_attribute).ok_or_else(|| {
                LoadError::MissingAttribute {
                    element: section.element,
                    attribute: section.key_attribute,
                    context: section_context.clone(),
                }
            })?;
            let context = section_context.clone().with_key(key);
            let spec = load_spec(section, entry, &context)?;
            case.insert(section.class, key, spec)
                .map_err(|err| LoadError::from_spec(err, context.clone()))?;
            debug!(label, section = section.section, key, "loaded shift");
        }
    }
    Ok(case)
}

fn load_spec(
    section: &SectionLayout,
    node: &XmlNode,
    context: &ErrorContext,
) -> Result<ShiftSpec, LoadError> {
    let spec_error = |err: ShiftSpecError| LoadError::from_spec(err, context.clone());
    match section.shape() {
        ShiftShape::Curve => {
            let shift_type = required_shift_type(node, context)?;
            let shifts = reals(node, layout::SHIFTS, context)?;
            let tenors = periods(node, layout::SHIFT_TENORS, context)?;
            CurveShiftSpec::new(shift_type, shifts, tenors)
                .map(ShiftSpec::Curve)
                .map_err(spec_error)
        }
        ShiftShape::Spot => {
            let shift_type = required_shift_type(node, context)?;
            let text = required_text(node, layout::SHIFT_SIZE, context)?;
            let size = values::parse_real(text)
                .map_err(|err| LoadError::unparsable(text, err, context.clone()))?;
            Ok(ShiftSpec::Spot(SpotShiftSpec::new(shift_type, size)))
        }
        ShiftShape::Vol => {
            let shift_type = if section.shift_type_required() {
                Some(required_shift_type(node, context)?)
            } else {
                optional_shift_type(node, context)?
            };
            let shifts = reals(node, layout::SHIFTS, context)?;
            let expiries = periods(node, layout::SHIFT_EXPIRIES, context)?;
            VolShiftSpec::new(shift_type, shifts, expiries)
                .map(ShiftSpec::Vol)
                .map_err(spec_error)
        }
        ShiftShape::VolCube => load_cube(node, context).map(ShiftSpec::VolCube),
    }
}

fn load_cube(node: &XmlNode, context: &ErrorContext) -> Result<VolCubeShiftSpec, LoadError> {
    let shift_type = required_shift_type(node, context)?;
    let terms = periods(node, layout::SHIFT_TERMS, context)?;
    let expiries = periods(node, layout::SHIFT_EXPIRIES, context)?;
    let mut cube = VolCubeShiftSpec::new(shift_type, terms, expiries)
        .map_err(|err| LoadError::from_spec(err, context.clone()))?;

    let shifts = node
        .child(layout::SHIFTS)
        .ok_or_else(|| LoadError::MissingElement {
            element: layout::SHIFTS,
            context: context.clone(),
        })?;

    for shift in shifts.children_named(layout::SHIFT) {
        let expiry = shift.attribute(layout::EXPIRY);
        let term = shift.attribute(layout::TERM);
        let value = values::parse_real(shift.text())
            .map_err(|err| LoadError::unparsable(shift.text(), err, context.clone()));
        match (expiry, term) {
            (None, None) => cube.set_parallel_shift(value?),
            (Some(expiry), Some(term)) => {
                let expiry = period(expiry, context)?;
                let term = period(term, context)?;
                cube.insert_grid_shift(expiry, term, value?);
            }
            (expiry, term) => {
                return Err(LoadError::InconsistentGridKey {
                    expiry: expiry.map(str::to_string),
                    term: term.map(str::to_string),
                    context: context.clone(),
                })
            }
        }
    }
    Ok(cube)
}

fn required_text<'a>(
    node: &'a XmlNode,
    element: &'static str,
    context: &ErrorContext,
) -> Result<&'a str, LoadError> {
    node.child_text(element)
        .ok_or_else(|| LoadError::MissingElement {
            element,
            context: context.clone(),
        })
}

fn parse_shift_type(text: &str, context: &ErrorContext) -> Result<ShiftType, LoadError> {
    text.parse::<ShiftType>()
        .map_err(|err| LoadError::from_spec(err, context.clone()))
}

fn required_shift_type(node: &XmlNode, context: &ErrorContext) -> Result<ShiftType, LoadError> {
    parse_shift_type(required_text(node, layout::SHIFT_TYPE, context)?, context)
}

fn optional_shift_type(
    node: &XmlNode,
    context: &ErrorContext,
) -> Result<Option<ShiftType>, LoadError> {
    match node.child_text(layout::SHIFT_TYPE) {
        Some(text) if !text.is_empty() => parse_shift_type(text, context).map(Some),
        _ => Ok(None),
    }
}

fn reals(
    node: &XmlNode,
    element: &'static str,
    context: &ErrorContext,
) -> Result<Vec<f64>, LoadError> {
    let text = required_text(node, element, context)?;
    values::parse_compact_reals(text)
        .map_err(|err| LoadError::unparsable(text, err, context.clone()))
}

fn periods(
    node: &XmlNode,
    element: &'static str,
    context: &ErrorContext,
) -> Result<Vec<Period>, LoadError> {
    let text = required_text(node, element, context)?;
    values::parse_periods(text).map_err(|err| LoadError::unparsable(text, err, context.clone()))
}

fn period(text: &str, context: &ErrorContext) -> Result<Period, LoadError> {
    text.trim()
        .parse::<Period>()
        .map_err(|err| LoadError::unparsable(text, err.into(), context.clone()))
}

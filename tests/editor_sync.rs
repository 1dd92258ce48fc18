//! End-to-end control/parameter synchronization through the umbrella crate.

use std::sync::Arc;

use approx::assert_abs_diff_eq;
use legato::editor::{ControlValueProvider, RangedControl, SharedRangedControl};
use legato::{
    AutomationEvent, DisplayTransform, FloatParameterEditor, ParameterDefinition, ParameterTree,
    ParameterUnit,
};
use parking_lot::Mutex;

#[derive(Default)]
struct Knob {
    address: u64,
    minimum: f32,
    maximum: f32,
    value: f32,
    sets: u32,
}

impl ControlValueProvider for Knob {
    fn value(&self) -> f32 {
        self.value
    }
}

impl RangedControl for Knob {
    fn parameter_address(&self) -> u64 {
        self.address
    }
    fn set_parameter_address(&mut self, address: u64) {
        self.address = address;
    }
    fn minimum_value(&self) -> f32 {
        self.minimum
    }
    fn set_minimum_value(&mut self, value: f32) {
        self.minimum = value;
    }
    fn maximum_value(&self) -> f32 {
        self.maximum
    }
    fn set_maximum_value(&mut self, value: f32) {
        self.maximum = value;
    }
    fn set_value(&mut self, value: f32) {
        self.value = value;
        self.sets += 1;
    }
}

fn knob() -> (Arc<Mutex<Knob>>, SharedRangedControl) {
    let concrete = Arc::new(Mutex::new(Knob::default()));
    let shared: SharedRangedControl = concrete.clone();
    (concrete, shared)
}

fn gain_tree() -> ParameterTree {
    ParameterTree::builder()
        .parameter(
            ParameterDefinition::float("gain", "Gain", 1, -80.0, 10.0, ParameterUnit::Decibels)
                .with_transform(DisplayTransform::Logarithmic)
                .with_default(0.0),
        )
        .parameter(ParameterDefinition::percent("depth", "Depth", 2))
        .build()
        .expect("valid tree")
}

#[test]
fn log_display_parameter_spans_the_auxiliary_control_range() {
    let tree = gain_tree();
    let gain = tree.require(1).unwrap();
    let (mock, control) = knob();
    let mut editor = FloatParameterEditor::new(gain.clone(), &control);

    gain.set(10.0);
    editor.process_events();
    assert_abs_diff_eq!(mock.lock().value, 9.0, epsilon = 1e-5);

    gain.set(-80.0);
    editor.process_events();
    assert_abs_diff_eq!(mock.lock().value, 0.0, epsilon = 1e-5);
}

#[test]
fn preset_recall_resyncs_every_bound_control_without_echo() {
    let tree = gain_tree();
    let depth = tree.require(2).unwrap();
    let (mock, control) = knob();
    let mut editor = FloatParameterEditor::new(depth.clone(), &control);
    let sets_before = mock.lock().sets;

    // A preset recall is an engine-side write with no originator.
    depth.set(75.0);
    editor.process_events();
    editor.process_events();

    let mock = mock.lock();
    assert_eq!(mock.value, 75.0);
    assert_eq!(mock.sets, sets_before + 1);
    assert_eq!(depth.value(), 75.0);
}

#[test]
fn two_editors_on_one_parameter_stay_in_step() {
    let tree = gain_tree();
    let depth = tree.require(2).unwrap();

    let (mock_a, knob_a) = knob();
    let (mock_b, knob_b) = knob();
    let mut editor_a = FloatParameterEditor::new(depth.clone(), &knob_a);
    let mut editor_b = FloatParameterEditor::new(depth.clone(), &knob_b);

    editor_a.begin_gesture();
    mock_a.lock().value = 40.0;
    editor_a.control_changed(&knob_a);
    editor_a.end_gesture();

    // The other editor picks the change up on its own loop iteration.
    editor_b.process_events();

    assert_eq!(depth.value(), 40.0);
    assert_eq!(mock_a.lock().value, 40.0);
    assert_eq!(mock_b.lock().value, 40.0);
    // And applying it did not ricochet back into editor A.
    editor_a.process_events();
    assert_eq!(mock_a.lock().value, 40.0);
}

#[test]
fn secondary_control_routed_through_one_editor_is_mirrored() {
    let tree = gain_tree();
    let depth = tree.require(2).unwrap();

    let (slider_mock, slider) = knob();
    let (field_mock, field) = knob();
    let mut editor = FloatParameterEditor::new(depth.clone(), &slider);

    field_mock.lock().value = 12.5;
    editor.control_changed(&field);

    assert_eq!(depth.value(), 12.5);
    assert_eq!(slider_mock.lock().value, 12.5);
    assert_eq!(field_mock.lock().value, 12.5);
}

#[test]
fn gesture_over_a_log_control_reaches_the_host_classified() {
    let tree = gain_tree();
    let gain = tree.require(1).unwrap();
    let (mock, control) = knob();
    let mut editor = FloatParameterEditor::new(gain.clone(), &control);
    let (_host, host_events) = gain.subscribe();

    editor.begin_gesture();
    mock.lock().value = 9.0;
    editor.control_changed(&control);
    editor.end_gesture();

    let delivered = host_events.drain();
    let kinds: Vec<_> = delivered.iter().map(|c| c.event).collect();
    assert_eq!(kinds, [AutomationEvent::Touch, AutomationEvent::Release]);
    // Full-scale control position maps to the parameter maximum.
    assert_abs_diff_eq!(delivered[0].value, 10.0, epsilon = 1e-4);
}

#[test]
fn editor_releases_its_subscription_with_the_control_gone() {
    let tree = gain_tree();
    let depth = tree.require(2).unwrap();
    let (mock, control) = knob();
    let editor = FloatParameterEditor::new(depth.clone(), &control);

    // The editor holds only a weak handle; the two Arcs here are the test's.
    assert_eq!(Arc::strong_count(&mock), 2);
    drop(control);
    drop(mock);

    assert_eq!(depth.subscriber_count(), 1);
    drop(editor);
    assert_eq!(depth.subscriber_count(), 0);
}

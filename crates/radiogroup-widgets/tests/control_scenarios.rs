//! End-to-end behaviour of the group radio control against a host.
//!
//! Covers the canonical flows: plain options, an orphaned selection,
//! silent write-in, user choice with later option churn, and a full
//! round trip through [`FormControl`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use radiogroup_widgets::{
    FieldStatus, FormControl, FormFieldControl, GroupRadioControl, RadioGroupConfig,
    RadioGroupEvent, RadioItem, ValidationError, ValueAccessor, ViewRow, validators,
};

fn item(key: char) -> RadioItem<char> {
    RadioItem::new(key, format!("Option {key}"))
}

fn row(key: char, selected: bool, disabled: bool) -> ViewRow<char> {
    ViewRow {
        key,
        label: format!("Option {key}"),
        selected,
        disabled,
    }
}

struct Recorder {
    changes: Rc<RefCell<Vec<Option<RadioItem<char>>>>>,
    touches: Rc<Cell<u32>>,
}

fn record(control: &mut GroupRadioControl<char>) -> Recorder {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let touches = Rc::new(Cell::new(0u32));
    let c = Rc::clone(&changes);
    control.register_on_change(Box::new(move |value: Option<&RadioItem<char>>| {
        c.borrow_mut().push(value.cloned());
    }));
    let t = Rc::clone(&touches);
    control.register_on_touched(Box::new(move || t.set(t.get() + 1)));
    Recorder { changes, touches }
}

// ═════════════════════════════════════════════════════════════════════════
// Canonical flows
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn options_without_selection() {
    let mut control = GroupRadioControl::new();
    control.set_options(Some(vec![item('A'), item('B')]));
    assert_eq!(
        control.rows(),
        &[row('A', false, false), row('B', false, false)]
    );
    assert!(control.empty());
}

#[test]
fn orphaned_selection_is_shown_disabled() {
    let mut control = GroupRadioControl::new();
    control.set_options(Some(vec![item('A'), item('B')]));
    control.write_value(Some(item('C')));
    assert_eq!(
        control.rows(),
        &[
            row('A', false, false),
            row('B', false, false),
            row('C', true, true)
        ]
    );
    assert!(!control.empty());
}

#[test]
fn write_in_selects_without_callbacks() {
    let mut control = GroupRadioControl::new();
    let recorder = record(&mut control);
    control.set_options(Some(vec![item('A'), item('B')]));
    control.write_value(Some(item('B')));

    assert_eq!(control.rows()[1], row('B', true, false));
    assert!(recorder.changes.borrow().is_empty());
    assert_eq!(recorder.touches.get(), 0);
}

#[test]
fn user_choice_survives_option_churn() {
    let mut control = GroupRadioControl::new();
    let recorder = record(&mut control);
    control.set_options(Some(vec![item('A'), item('B')]));

    assert!(control.handle_event(RadioGroupEvent::RowChosen(item('A'))));
    assert_eq!(*recorder.changes.borrow(), vec![Some(item('A'))]);
    assert_eq!(recorder.touches.get(), 1);

    control.set_options(Some(vec![item('B')]));
    assert_eq!(
        control.rows(),
        &[row('B', false, false), row('A', true, true)]
    );
    assert_eq!(control.value(), Some(&item('A')));
    assert_eq!(recorder.changes.borrow().len(), 1);
}

#[test]
fn options_may_arrive_after_selection() {
    let mut control = GroupRadioControl::new();
    control.write_value(Some(item('B')));
    assert_eq!(control.rows(), &[row('B', true, true)]);

    control.set_options(Some(vec![item('A'), item('B')]));
    assert_eq!(
        control.rows(),
        &[row('A', false, false), row('B', true, false)]
    );
}

#[test]
fn state_changes_observe_post_mutation_state() {
    let control = Rc::new(RefCell::new(GroupRadioControl::new()));
    control
        .borrow_mut()
        .set_options(Some(vec![item('A'), item('B')]));

    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = Rc::clone(&seen);
    let view = control.borrow().store().view_changes().clone();
    let _sub = view.subscribe(move |rows: &Vec<ViewRow<char>>| {
        let selected: Vec<char> = rows.iter().filter(|r| r.selected).map(|r| r.key).collect();
        s.borrow_mut().push(selected);
    });

    control.borrow_mut().write_value(Some(item('A')));
    control.borrow_mut().select_row(item('B'));
    assert_eq!(*seen.borrow(), vec![vec!['A'], vec!['B']]);
}

// ═════════════════════════════════════════════════════════════════════════
// Host integration
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn form_control_round_trip() {
    let control = Rc::new(RefCell::new(GroupRadioControl::with_config(
        &RadioGroupConfig::default().required(true),
    )));
    control
        .borrow_mut()
        .set_options(Some(vec![item('A'), item('B')]));

    let mut field = FormControl::new(Some(item('B'))).with_validator(validators::required());
    field.attach(control.clone());

    assert_eq!(control.borrow().value(), Some(&item('B')));
    assert!(!field.is_dirty());

    field.set_value(None);
    assert!(control.borrow().empty());
    assert_eq!(field.errors(), vec![ValidationError::Required]);

    control.borrow_mut().do_check(&field);
    assert!(!control.borrow().error_state());
    field.mark_as_touched();
    control.borrow_mut().do_check(&field);
    assert!(control.borrow().error_state());

    assert!(control.borrow_mut().select_row(item('A')));
    assert_eq!(field.value(), Some(item('A')));
    assert!(field.is_dirty());
    assert!(field.is_touched());
    assert!(!field.is_invalid());

    control.borrow_mut().do_check(&field);
    assert!(!control.borrow().error_state());
}

#[test]
fn host_disable_blocks_user_choice() {
    let control = Rc::new(RefCell::new(GroupRadioControl::new()));
    control.borrow_mut().set_options(Some(vec![item('A')]));

    let mut field = FormControl::<RadioItem<char>>::new(None);
    field.attach(control.clone());
    field.disable();
    assert!(control.borrow().disabled());
    assert!(!control.borrow_mut().select_row(item('A')));
    assert_eq!(field.value(), None);

    field.enable();
    assert!(!control.borrow().disabled());
    assert!(control.borrow_mut().select_row(item('A')));
    assert_eq!(field.value(), Some(item('A')));
}

#[cfg(feature = "state-persistence")]
#[test]
fn persisted_selection_restores_through_json() {
    use radiogroup_widgets::{RadioGroupPersist, Stateful, VersionedState};

    let mut source = GroupRadioControl::new();
    source.set_options(Some(vec![item('A'), item('B')]));
    source.select_row(item('B'));
    let json = serde_json::to_string(&VersionedState::pack(&source)).expect("serialize");

    let envelope: VersionedState<RadioGroupPersist<char>> =
        serde_json::from_str(&json).expect("deserialize");
    let mut target = GroupRadioControl::new();
    let recorder = record(&mut target);
    target.set_options(Some(vec![item('A'), item('B')]));
    target.restore_state(envelope.unpack_or_default::<GroupRadioControl<char>>());

    assert_eq!(target.value(), Some(&item('B')));
    assert!(recorder.changes.borrow().is_empty());
}

#[test]
fn chrome_bindings_end_with_scope() {
    use radiogroup_runtime::BindingScope;

    let mut control = GroupRadioControl::<char>::new();
    let renders = Rc::new(Cell::new(0u32));
    let clicks = Rc::new(Cell::new(0u32));

    let mut scope = BindingScope::new();
    let r = Rc::clone(&renders);
    let c = Rc::clone(&clicks);
    scope
        .subscribe(control.state_changes(), move |_| r.set(r.get() + 1))
        .subscribe(control.container_click(), move |_| c.set(c.get() + 1));
    assert_eq!(scope.binding_count(), 2);

    control.set_placeholder("Carrier");
    control.on_container_click();
    assert_eq!((renders.get(), clicks.get()), (1, 1));

    drop(scope);
    control.set_placeholder("Service");
    control.on_container_click();
    assert_eq!((renders.get(), clicks.get()), (1, 1));
}

#[test]
fn detached_field_ignores_later_choices() {
    let control = Rc::new(RefCell::new(GroupRadioControl::new()));
    control
        .borrow_mut()
        .set_options(Some(vec![item('A'), item('B')]));

    let mut field = FormControl::<RadioItem<char>>::new(None);
    field.attach(control.clone());
    field.detach();

    assert!(control.borrow_mut().select_row(item('A')));
    assert_eq!(control.borrow().value(), Some(&item('A')));
    assert_eq!(field.value(), None);
    assert!(!field.is_dirty());
    assert!(!field.is_touched());
}

use dtm::{Direction, Machine, MachineConfig, Outcome, ProgramManager, RunOptions, Step};

fn unary_increment() -> MachineConfig {
    MachineConfig::builder("q0")
        .states(["q0", "q1", "accept", "reject"])
        .alphabet(['0', '1', '_'])
        .rule("q0", '1', "q0", '1', Direction::Right)
        .rule("q0", '0', "q0", '0', Direction::Right)
        .rule("q0", '_', "q1", '1', Direction::Left)
        .rule("q1", '1', "q1", '1', Direction::Left)
        .rule("q1", '0', "q1", '0', Direction::Left)
        .rule("q1", '_', "accept", '_', Direction::Right)
        .build()
}

#[test]
fn unary_increment_accepts_and_appends_one() {
    let mut machine = Machine::new(unary_increment());
    machine.load_tape("110");

    let execution = machine.run(1000).unwrap();

    assert_eq!(execution.outcome, Outcome::Accepted);
    assert_eq!(machine.tape().trimmed(), "1101");
    assert_eq!(execution.tape, "_1101");
    // three moves right, write, three moves left, final move onto the tape
    assert_eq!(execution.records.len(), 8);
    assert_eq!(execution.records.last().unwrap().to, "accept");
}

#[test]
fn unary_increment_reports_only_real_changes() {
    let mut machine = Machine::new(unary_increment());
    machine.load_tape("110");

    let execution = machine.run(1000).unwrap();
    let changed: Vec<_> = execution
        .records
        .iter()
        .filter_map(|r| r.changed.map(|i| (r.step, i)))
        .collect();

    assert_eq!(changed, vec![(4, 3)]);
}

#[test]
fn binary_increment_with_carry() {
    let program = ProgramManager::get_by_name("Binary increment with carry").unwrap();
    let mut machine = Machine::new(program.config.clone());
    machine.load_tape("110");

    let execution = machine.run(1000).unwrap();

    assert_eq!(execution.outcome, Outcome::Accepted);
    assert_eq!(machine.tape().trimmed(), "111");
}

#[test]
fn binary_increment_carries_past_the_front() {
    let program = ProgramManager::get_by_name("Binary increment with carry").unwrap();
    let mut machine = Machine::new(program.config.clone());
    machine.load_tape("111");

    let execution = machine.run(1000).unwrap();

    assert_eq!(execution.outcome, Outcome::Accepted);
    assert_eq!(machine.tape().trimmed(), "1000");
}

#[test]
fn immediate_reject_without_records() {
    let config = MachineConfig::builder("q0")
        .states(["q0", "accept", "reject"])
        .alphabet(['0'])
        .build();
    let mut machine = Machine::new(config);
    machine.load_tape("0");

    let execution = machine.run(1000).unwrap();

    assert_eq!(execution.outcome, Outcome::Rejected);
    assert!(execution.records.is_empty());
    assert_eq!(machine.step_count(), 0);
    assert_eq!(machine.state(), "reject");
}

#[test]
fn exhaustion_is_distinct_from_rejection() {
    let config = MachineConfig::builder("q0")
        .rule("q0", '1', "q0", '1', Direction::Right)
        .build();
    let mut machine = Machine::new(config);
    machine.load_tape(&"1".repeat(32));

    let execution = dtm::run(&mut machine, RunOptions { max_steps: 10 }).unwrap();

    assert_eq!(execution.outcome, Outcome::Exhausted);
    assert_eq!(execution.records.len(), 10);
    assert_eq!(execution.state, "q0");
    assert!(!machine.is_halted());
}

#[test]
fn runs_can_be_resumed() {
    let mut machine = Machine::new(unary_increment());
    machine.load_tape("110");

    let first = machine.run(3).unwrap();
    assert_eq!(first.outcome, Outcome::Exhausted);

    let second = machine.run(1000).unwrap();
    assert_eq!(second.outcome, Outcome::Accepted);
    assert_eq!(second.records.first().unwrap().step, 4);
    assert_eq!(first.records.len() + second.records.len(), 8);
}

#[test]
fn reset_then_load_starts_fresh() {
    let mut machine = Machine::new(unary_increment());
    machine.load_tape("x");
    assert_eq!(machine.step(), Step::NoTransition);

    machine.reset();
    machine.load_tape("0");

    let execution = machine.run(1000).unwrap();
    assert_eq!(execution.outcome, Outcome::Accepted);
    assert_eq!(machine.tape().trimmed(), "01");
}

#[test]
fn out_of_alphabet_input_is_rejected_by_lookup() {
    let mut machine = Machine::try_new(unary_increment()).unwrap();
    machine.load_tape("1a1");

    let execution = machine.run(1000).unwrap();

    assert_eq!(execution.outcome, Outcome::Rejected);
    assert_eq!(execution.records.len(), 1);
}

#[test]
fn independent_machines_run_on_separate_threads() {
    let handles: Vec<_> = ["0", "1", "10", "111"]
        .into_iter()
        .map(|input| {
            std::thread::spawn(move || {
                let mut machine = Machine::new(unary_increment());
                machine.load_tape(input);
                let execution = machine.run(1000).unwrap();
                (execution.outcome, machine.tape().trimmed())
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(
        results,
        vec![
            (Outcome::Accepted, "01".to_string()),
            (Outcome::Accepted, "11".to_string()),
            (Outcome::Accepted, "101".to_string()),
            (Outcome::Accepted, "1111".to_string()),
        ]
    );
}

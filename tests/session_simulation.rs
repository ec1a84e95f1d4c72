// Scenario tests for the debug-session state machine: full navigation
// sequences the way a UI would issue them.

#[cfg(test)]
mod session_tests {
    use playground_debugger::debugger::{
        Breakpoints, DebugAction, DebugSession, Debugger, ROOT_FRAME,
    };

    const FIVE_LINES: &str = "a = 1\nb = 2\nc = 3\nd = 4\ne = 5";

    #[test]
    fn test_start_pauses_at_first_step() {
        let mut debugger = Debugger::new();
        let snapshot = debugger.start(FIVE_LINES);

        assert_eq!(snapshot.line, 1);
        assert!(snapshot.paused);
        assert!(!snapshot.terminated);
        assert_eq!(snapshot.call_stack, vec![ROOT_FRAME.to_string()]);
        assert!(debugger.is_debugging());
        assert!(debugger.is_paused());
    }

    #[test]
    fn test_step_over_clamps_at_last_step() {
        let mut debugger = Debugger::new();
        debugger.start("a = 1\nb = 2\nc = 3");

        let mut last_line = 0;
        for _ in 0..10 {
            let snapshot = debugger
                .navigate(DebugAction::StepOver)
                .expect("session stays active");
            last_line = snapshot.line;
        }

        assert_eq!(last_line, 3, "cursor never moves past the last step");
        assert!(debugger.is_debugging(), "clamping does not end the session");
    }

    #[test]
    fn test_continue_visits_breakpoints_in_order() {
        let mut debugger = Debugger::new();
        debugger.toggle_breakpoint(2);
        debugger.toggle_breakpoint(4);
        debugger.start(FIVE_LINES);

        let first = debugger
            .navigate(DebugAction::Continue)
            .expect("first breakpoint ahead");
        assert_eq!(first.line, 2);

        let second = debugger
            .navigate(DebugAction::Continue)
            .expect("second breakpoint ahead");
        assert_eq!(second.line, 4);

        let done = debugger.navigate(DebugAction::Continue);
        assert!(done.is_none(), "no breakpoint ahead signals completion");
        assert!(debugger.is_debugging(), "the caller decides whether to stop");
        let current = debugger.current().expect("session still live");
        assert_eq!(current.line, 4, "cursor did not move past the last match");
    }

    #[test]
    fn test_continue_without_breakpoints_is_completion() {
        let mut debugger = Debugger::new();
        debugger.start(FIVE_LINES);

        assert!(debugger.navigate(DebugAction::Continue).is_none());
        let current = debugger.current().expect("session still live");
        assert_eq!(current.line, 1, "cursor unchanged");
    }

    #[test]
    fn test_restart_reproduces_initial_state() {
        let mut debugger = Debugger::new();
        let initial = debugger.start(FIVE_LINES);

        debugger.navigate(DebugAction::StepOver);
        debugger.navigate(DebugAction::StepInto);
        debugger.navigate(DebugAction::StepOver);

        let restarted = debugger
            .navigate(DebugAction::Restart)
            .expect("restart keeps the session");

        assert_eq!(restarted.line, initial.line);
        assert_eq!(
            restarted.variables, initial.variables,
            "the exact first table comes back"
        );
        assert_eq!(restarted.call_stack, vec![ROOT_FRAME.to_string()]);
    }

    #[test]
    fn test_step_into_descends_and_step_out_returns() {
        let mut debugger = Debugger::new();
        debugger.start(FIVE_LINES);

        let descended = debugger
            .navigate(DebugAction::StepInto)
            .expect("session active");
        assert_eq!(descended.call_stack.len(), 2, "a frame was pushed");
        assert_eq!(descended.call_stack[0], ROOT_FRAME, "root stays at the bottom");

        let returned = debugger
            .navigate(DebugAction::StepOut)
            .expect("session active");
        assert_eq!(returned.call_stack, vec![ROOT_FRAME.to_string()]);
    }

    #[test]
    fn test_step_out_never_pops_root_frame() {
        let mut debugger = Debugger::new();
        debugger.start(FIVE_LINES);

        for _ in 0..5 {
            let snapshot = debugger
                .navigate(DebugAction::StepOut)
                .expect("session active");
            assert_eq!(snapshot.call_stack, vec![ROOT_FRAME.to_string()]);
        }
    }

    #[test]
    fn test_step_out_advances_up_to_three_steps() {
        let mut debugger = Debugger::new();
        debugger.start("a = 1\nb = 2\nc = 3\nd = 4\ne = 5\nf = 6");

        let snapshot = debugger
            .navigate(DebugAction::StepOut)
            .expect("session active");
        assert_eq!(snapshot.line, 4, "three steps forward from the start");

        let clamped = debugger
            .navigate(DebugAction::StepOut)
            .expect("session active");
        assert_eq!(clamped.line, 6, "clamped to the last step");
    }

    #[test]
    fn test_stop_destroys_the_session() {
        let mut debugger = Debugger::new();
        debugger.start(FIVE_LINES);

        assert!(debugger.navigate(DebugAction::Stop).is_none());
        assert!(!debugger.is_debugging());
        assert!(!debugger.is_paused());
        assert!(debugger.current().is_none());
    }

    #[test]
    fn test_navigation_without_session_is_noop() {
        let mut debugger = Debugger::new();

        for action in [
            DebugAction::Continue,
            DebugAction::StepOver,
            DebugAction::StepInto,
            DebugAction::StepOut,
            DebugAction::Restart,
            DebugAction::Stop,
        ] {
            assert!(
                debugger.navigate(action).is_none(),
                "{action:?} must be a no-op with no session"
            );
        }
        assert!(!debugger.is_debugging());
    }

    #[test]
    fn test_toggle_debugging_round_trip() {
        let mut debugger = Debugger::new();

        let started = debugger.toggle_debugging(FIVE_LINES);
        assert!(started.is_some());
        assert!(debugger.is_debugging());

        let stopped = debugger.toggle_debugging(FIVE_LINES);
        assert!(stopped.is_none());
        assert!(!debugger.is_debugging());
    }

    #[test]
    fn test_new_start_discards_previous_session() {
        let mut debugger = Debugger::new();
        debugger.start(FIVE_LINES);
        debugger.navigate(DebugAction::StepOver);
        debugger.navigate(DebugAction::StepOver);

        let fresh = debugger.start("x = 1\ny = 2");
        assert_eq!(fresh.line, 1, "a new session starts from the top");
    }

    #[test]
    fn test_session_keeps_breakpoints_from_start() {
        let mut debugger = Debugger::new();
        debugger.start(FIVE_LINES);

        // Toggled after start: the live session does not see it.
        debugger.toggle_breakpoint(3);
        assert!(debugger.navigate(DebugAction::Continue).is_none());

        // A fresh session picks it up.
        debugger.start(FIVE_LINES);
        let hit = debugger
            .navigate(DebugAction::Continue)
            .expect("breakpoint visible after restart");
        assert_eq!(hit.line, 3);
    }

    #[test]
    fn test_continue_reaches_synthesized_breakpoint_step() {
        // Line 3 is a comment, so its step is synthesized at start.
        let source = "a = 1\nb = 2\n# gap\nc = 3\nd = 4";
        let mut debugger = Debugger::new();
        debugger.toggle_breakpoint(3);
        debugger.start(source);

        let hit = debugger
            .navigate(DebugAction::Continue)
            .expect("synthesized step is a real stop");
        assert_eq!(hit.line, 3);

        let preceding = {
            let session = DebugSession::new(source, &Breakpoints::new());
            session
                .current()
                .variables
                .clone()
        };
        // Line 1 and line 2 share the seed table here, so the synthesized
        // step's table matches the session's initial one.
        assert_eq!(hit.variables, preceding);
    }

    #[test]
    fn test_direct_session_handle() {
        // The session type works standalone, owned by the caller.
        let mut breakpoints = Breakpoints::new();
        breakpoints.toggle(2);

        let mut session = DebugSession::new("a = 1\nb = 2\nc = 3", &breakpoints);
        assert_eq!(session.current().line, 1);
        assert_eq!(session.step_count(), 3);

        let hit = session.resume().expect("breakpoint at line 2");
        assert_eq!(hit.line, 2);

        session.step_over();
        assert_eq!(session.current().line, 3);
        assert_eq!(session.cursor(), 2);

        session.terminate();
        assert!(session.is_terminated());
        assert!(!session.is_paused());
    }

    #[test]
    fn test_graph_grows_with_progress() {
        let mut source = String::new();
        for n in 1..=12 {
            source.push_str(&format!("v{n} = {n}\n"));
        }

        let mut debugger = Debugger::new();
        let at_start = debugger.start(&source);
        let start_nodes = at_start.graph.nodes.len();

        for _ in 0..11 {
            debugger.navigate(DebugAction::StepOver);
        }
        let at_end = debugger
            .current()
            .expect("session still live");

        assert_eq!(start_nodes, 2);
        assert!(
            at_end.graph.nodes.len() > start_nodes,
            "the graph evolves as the session advances"
        );
    }
}

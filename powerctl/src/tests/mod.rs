#[cfg(test)]
mod tests {
    use crate::controller::{request_power_action, PowerProvider, SHUTDOWN_PRIVILEGE};
    use crate::error::{Error, Result};
    use crate::PowerAction;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        EnablePrivilege(String),
        ExitSession(u32),
        Suspend { hibernate: bool, force: bool },
    }

    /// Recording fake. By default every call succeeds; `enable_privilege`
    /// succeeding without side effects also models a platform where the
    /// adjustment facility is absent and elevation is skipped.
    #[derive(Default)]
    struct TestPower {
        calls: RefCell<Vec<Call>>,
        fail_privilege: bool,
        fail_exit: bool,
    }

    impl TestPower {
        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl PowerProvider for TestPower {
        fn enable_privilege(&self, privilege: &str) -> Result<()> {
            self.calls
                .borrow_mut()
                .push(Call::EnablePrivilege(privilege.to_string()));
            if self.fail_privilege {
                return Err(Error::Privilege(
                    "A required privilege is not held by the client.".to_string(),
                ));
            }
            Ok(())
        }

        fn exit_session(&self, flags: u32) -> Result<()> {
            self.calls.borrow_mut().push(Call::ExitSession(flags));
            if self.fail_exit {
                return Err(Error::Privilege("Access is denied.".to_string()));
            }
            Ok(())
        }

        fn suspend(&self, hibernate: bool, force: bool) -> Result<()> {
            self.calls
                .borrow_mut()
                .push(Call::Suspend { hibernate, force });
            Ok(())
        }
    }

    #[test]
    fn test_suspend_dispatch() {
        for force in [false, true] {
            let power = TestPower::default();
            request_power_action(&power, PowerAction::Suspend, force).unwrap();
            assert_eq!(
                power.calls(),
                [Call::Suspend {
                    hibernate: false,
                    force
                }]
            );
        }
    }

    #[test]
    fn test_hibernate_dispatch() {
        for force in [false, true] {
            let power = TestPower::default();
            request_power_action(&power, PowerAction::Hibernate, force).unwrap();
            assert_eq!(
                power.calls(),
                [Call::Suspend {
                    hibernate: true,
                    force
                }]
            );
        }
    }

    #[test]
    fn test_exit_actions_elevate_then_exit() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        for (action, base) in [
            (PowerAction::LogOff, 0),
            (PowerAction::ShutDown, 1),
            (PowerAction::Reboot, 2),
            (PowerAction::PowerOff, 8),
        ] {
            for force in [false, true] {
                let power = TestPower::default();
                request_power_action(&power, action, force).unwrap();
                let flags = if force { base | 4 } else { base };
                assert_eq!(
                    power.calls(),
                    [
                        Call::EnablePrivilege(SHUTDOWN_PRIVILEGE.to_string()),
                        Call::ExitSession(flags),
                    ]
                );
            }
        }
    }

    #[test]
    fn test_forced_shutdown_without_adjustment_facility() {
        // Elevation is a skipped no-op; the exit call still goes out with
        // the force bit set: 1 | 4 = 5.
        let power = TestPower::default();
        request_power_action(&power, PowerAction::ShutDown, true).unwrap();
        assert_eq!(power.calls().last(), Some(&Call::ExitSession(5)));
    }

    #[test]
    fn test_privilege_failure_stops_exit() {
        let power = TestPower {
            fail_privilege: true,
            ..Default::default()
        };
        let err = request_power_action(&power, PowerAction::Reboot, false).unwrap_err();
        assert!(matches!(err, Error::Privilege(_)));
        assert_eq!(
            power.calls(),
            [Call::EnablePrivilege(SHUTDOWN_PRIVILEGE.to_string())]
        );
    }

    #[test]
    fn test_exit_failure_surfaces_privilege_error() {
        let power = TestPower {
            fail_exit: true,
            ..Default::default()
        };
        let err = request_power_action(&power, PowerAction::PowerOff, false).unwrap_err();
        match err {
            Error::Privilege(message) => assert!(!message.is_empty()),
            other => panic!("expected a privilege error, got {other:?}"),
        }
    }

    #[test]
    fn test_suspend_does_not_elevate() {
        let power = TestPower::default();
        request_power_action(&power, PowerAction::Hibernate, true).unwrap();
        assert!(!power
            .calls()
            .iter()
            .any(|call| matches!(call, Call::EnablePrivilege(_))));
    }
}

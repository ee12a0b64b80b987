/// Returns the error of a `Result`, panicking on `Ok`.
///
/// A second argument names a predicate method the error must satisfy:
/// `assert_err!(compile(..), is_unknown_enum)`.
#[macro_export]
macro_rules! assert_err {
    ($e:expr) => {
        match $e {
            Err(e) => e,
            Ok(v) => panic!("expected `Err`; actual=Ok({:?})", v),
        }
    };
    ($e:expr, $is_kind:ident) => {{
        let err = $crate::assert_err!($e);
        assert!(
            err.$is_kind(),
            "expected error satisfying `{}`; actual={}",
            stringify!($is_kind),
            err
        );
        err
    }};
}

#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!("expected `Ok`; actual=Err({:?})", e),
        }
    };
}

#[cfg(test)]
mod tests {
    #[derive(Debug)]
    struct Rejected;

    impl Rejected {
        fn is_rejected(&self) -> bool {
            true
        }
    }

    impl std::fmt::Display for Rejected {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("rejected")
        }
    }

    #[test]
    fn err_with_predicate() {
        let res: Result<u8, Rejected> = Err(Rejected);
        assert_err!(res, is_rejected);
    }

    #[test]
    #[should_panic(expected = "expected `Err`; actual=Ok(1)")]
    fn err_on_ok_panics() {
        let res: Result<u8, Rejected> = Ok(1);
        assert_err!(res);
    }

    #[test]
    fn ok_unwraps() {
        let res: Result<u8, Rejected> = Ok(1);
        assert_eq!(assert_ok!(res), 1);
    }
}

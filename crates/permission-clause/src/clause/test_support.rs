//! Test helpers for asserting clause compilation outcomes.
use super::compiler::{RpnQueue, compile};
use super::lexer::Lexer;
use crate::errors::ClauseError;

pub(crate) fn compile_ok(clause: &str) -> RpnQueue {
    match compile(clause) {
        Ok(rpn) => rpn,
        Err(err) => panic!("clause '{clause}' should compile: {err}"),
    }
}

pub(crate) fn compile_err(clause: &str) -> ClauseError {
    match compile(clause) {
        Ok(rpn) => panic!("clause '{clause}' should fail to compile, got '{rpn}'"),
        Err(err) => err,
    }
}

pub(crate) fn elements(clause: &str) -> Vec<(usize, &str)> {
    Lexer::new(clause)
        .map(|next| match next {
            Ok(element) => element,
            Err(err) => panic!("clause '{clause}' should lex: {err}"),
        })
        .collect()
}

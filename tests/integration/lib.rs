mod support;

pub(crate) use support::*;

mod http_source_tests;
mod photo_interaction_tests;

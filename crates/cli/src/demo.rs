//! Demonstration configuration bound on every run.
//!
//! Shows every source the binder supports: a stored value with an
//! environment override, declared defaults, and two nested sections.

use serde::Serialize;

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DemoConfig {
    pub project_name: String,
    pub lucky_agent: f64,
    pub second_bool: bool,
    pub true_bool: bool,
    pub context: Context,
    pub book_of_numbers: BookOfNumbers,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Context {
    pub section_text: String,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BookOfNumbers {
    pub float_test: f32,
    pub the_answer: u8,
}

envini::bindable!(DemoConfig {
    project_name: Str => "Project Name", env = "PROJECT_NAME";
    lucky_agent: F64 => "lucky_agent", default = "12";
    second_bool: Bool => "second_bool", default = "false";
    true_bool: Bool => "true_bool", default = "true";
    context: Section => "Context";
    book_of_numbers: Section => "Book of Numbers";
});

envini::bindable!(Context {
    section_text: Str => "section_text", default = "Quoth the Raven “Nevermore.”";
});

envini::bindable!(BookOfNumbers {
    float_test: F32 => "float_test";
    the_answer: U8 => "the_answer", env = "THE_ANSWER";
});

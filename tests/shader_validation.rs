//! Validate the WGSL sources with naga, so shader regressions fail in CI
//! instead of at pipeline creation.

use naga::valid::{Capabilities, ValidationFlags, Validator};

fn validate(source: &str) {
    let module = naga::front::wgsl::parse_str(source).expect("WGSL parse failed");
    Validator::new(ValidationFlags::all(), Capabilities::empty())
        .validate(&module)
        .expect("WGSL validation failed");
}

#[test]
fn solid_shader_is_valid() {
    validate(arbor::gpu::shader::SOLID_SHADER);
}

#[test]
fn textured_shader_is_valid() {
    validate(arbor::gpu::shader::TEXTURED_SHADER);
}

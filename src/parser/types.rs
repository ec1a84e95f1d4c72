/// One step-candidate source line with its original 1-based number.
#[derive(Debug, Clone)]
pub struct SourceLine {
    pub number: u32,
    pub text: String,
}

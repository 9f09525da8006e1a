use crate::validate::ValidationError;

/// Field state shared by the step forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value<T> {
    pub value: T,
    pub warning: Option<&'static str>,
    pub valid: bool,
}

impl std::default::Default for Value<String> {
    fn default() -> Self {
        Self {
            value: "".to_string(),
            warning: None,
            valid: true,
        }
    }
}

impl Value<String> {
    /// Stores `input` along with the outcome of `check`.
    ///
    /// An empty field is displayed as valid but cannot be submitted.
    pub fn edit<F>(&mut self, input: String, check: F)
    where
        F: Fn(&str) -> Result<String, ValidationError>,
    {
        let res = check(&input);
        self.valid = input.is_empty() || res.is_ok();
        self.warning = if self.valid {
            None
        } else {
            res.err().map(|e| e.warning())
        };
        self.value = input;
    }

    pub fn is_submittable(&self) -> bool {
        self.valid && !self.value.trim().is_empty()
    }
}

use std::fmt;

use serde::Serialize;

use crate::Score;

/// Object describing the score of a given document.
/// It is organized in trees.
///
/// `.to_pretty_json()` can be useful to print out a human readable
/// representation of this tree when debugging a given score.
/// The `Display` implementation renders the same tree as indented
/// `value = description` lines.
#[derive(Clone, PartialEq, Serialize)]
pub struct Explanation {
    value: Score,
    description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<Explanation>,
}

impl fmt::Debug for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Explanation({})", self.to_pretty_json())
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

impl Explanation {
    /// Creates a new explanation object.
    pub fn new<T: ToString>(description: T, value: Score) -> Explanation {
        Explanation {
            value,
            description: description.to_string(),
            details: vec![],
        }
    }

    /// Creates a new explanation object with the given children.
    pub fn with_details<T: ToString>(
        description: T,
        value: Score,
        details: Vec<Explanation>,
    ) -> Explanation {
        Explanation {
            value,
            description: description.to_string(),
            details,
        }
    }

    /// Returns the value associated to the current node.
    pub fn value(&self) -> Score {
        self.value
    }

    /// Returns the description of the current node.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the children of the current node.
    pub fn details(&self) -> &[Explanation] {
        &self.details
    }

    /// Add some detail, explaining some part of the current node formula.
    ///
    /// Details are treated as child of the current node.
    pub fn add_detail(&mut self, child_explanation: Explanation) {
        self.details.push(child_explanation);
    }

    /// Shortcut for `self.details.push(Explanation::new(name, value));`
    pub fn add_const<T: ToString>(&mut self, name: T, value: Score) {
        self.details.push(Explanation::new(name, value));
    }

    /// Returns an indented json representation of the explanation tree for debug usage.
    pub fn to_pretty_json(&self) -> String {
        // Serializing plain strings, floats and vecs cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    fn write_indented(&self, f: &mut fmt::Formatter, depth: usize) -> fmt::Result {
        writeln!(
            f,
            "{:indent$}{} = {}",
            "",
            self.value,
            self.description,
            indent = depth * 2
        )?;
        for detail in &self.details {
            detail.write_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Explanation;

    #[test]
    fn test_explanation_tree() {
        let mut explanation = Explanation::new("sum of:", 3.0);
        explanation.add_const("first", 1.0);
        let mut second = Explanation::new("second", 2.0);
        second.add_const("inner", 2.0);
        explanation.add_detail(second);
        assert_eq!(explanation.details().len(), 2);
        assert_eq!(explanation.details()[1].description(), "second");
        assert_eq!(
            explanation.to_string(),
            "3 = sum of:\n  1 = first\n  2 = second\n    2 = inner\n"
        );
    }

    #[test]
    fn test_explanation_json_skips_empty_details() {
        let explanation = Explanation::new("collection probability", 0.5);
        let json = explanation.to_pretty_json();
        assert!(json.contains("\"description\": \"collection probability\""));
        assert!(!json.contains("details"));
    }
}

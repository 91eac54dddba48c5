//! Diagram data model.
//!
//! Plain owned data, immutable after construction. Category order is
//! significant: it selects the slot a branch is placed in (see `slots`).

/// Hard limit on branches: the slot table has three horizontal zones with
/// two vertical sides each.
pub const MAX_CATEGORIES: usize = 6;

/// A top-level cause grouping (one "bone" of the fishbone).
#[derive(Clone, Debug)]
pub struct Category {
    pub name: String,
    pub causes: Vec<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, causes: &[&str]) -> Self {
        Self {
            name: name.into(),
            causes: causes.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

/// A complete fishbone diagram: the problem statement drawn in the head,
/// plus up to [`MAX_CATEGORIES`] ordered categories.
#[derive(Clone, Debug)]
pub struct Diagram {
    pub problem: String,
    pub categories: Vec<Category>,
}

impl Diagram {
    pub fn new(problem: impl Into<String>, categories: Vec<Category>) -> Self {
        Self {
            problem: problem.into(),
            categories,
        }
    }
}

impl Default for Diagram {
    /// The classic 6M example set.
    fn default() -> Self {
        Diagram::new(
            "Problem",
            vec![
                Category::new(
                    "Method",
                    &["Time consumption", "Cost", "Procedures", "Inefficient process"],
                ),
                Category::new("Machine", &["Faulty equipment", "Compatibility"]),
                Category::new(
                    "Material",
                    &["Poor-quality input", "Raw materials", "Supplier", "Shortage"],
                ),
                Category::new(
                    "Measurement",
                    &["Calibration", "Performance", "Wrong measurements"],
                ),
                Category::new("Environment", &["Bad conditions"]),
                Category::new(
                    "People",
                    &[
                        "Lack of training",
                        "Managers",
                        "Labor shortage",
                        "Procedures",
                        "Skills",
                    ],
                ),
            ],
        )
    }
}

use minijinja::{context, Environment};
use mushroom::MushroomSample;

/// HTML pages. Templates are compiled into the binary; `.html` names get
/// autoescaping.
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("index.html", include_str!("../templates/index.html"))?;
        env.add_template("submit.html", include_str!("../templates/submit.html"))?;
        Ok(Self { env })
    }

    pub fn index(&self) -> Result<String, minijinja::Error> {
        self.env.get_template("index.html")?.render(context! {
            characteristics => mushroom::characteristics(),
        })
    }

    /// Prediction page; the confirmation form is only rendered when feedback
    /// is collected.
    pub fn submit(
        &self,
        probability: f64,
        sample: &MushroomSample,
        feedback_enabled: bool,
    ) -> Result<String, minijinja::Error> {
        self.env.get_template("submit.html")?.render(context! {
            probability => probability,
            sample => sample,
            feedback_enabled => feedback_enabled,
        })
    }
}

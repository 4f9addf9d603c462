//! One-shot prediction.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use premium_client::PredictionClient;
use premium_core::{IPredictionClient, InputSet, PremiumConfig};
use premium_ui::{render_panel, Session};

/// Send one prediction request and print the result panel.
///
/// Missing fields are reported without contacting the service.
#[derive(Args, Debug, Clone, Default)]
pub struct PredictCommand {
    #[arg(long, default_value = "")]
    pub age: String,

    /// Height in centimetres
    #[arg(long, default_value = "")]
    pub height: String,

    /// Weight in kilograms
    #[arg(long, default_value = "")]
    pub weight: String,
}

impl PredictCommand {
    /// Returns whether the prediction succeeded.
    pub fn run(&self, config: &PremiumConfig) -> Result<bool> {
        let client =
            PredictionClient::new(&config.client).context("failed to build HTTP client")?;
        let stdout = std::io::stdout();
        self.run_with(client, config, &mut stdout.lock())
    }

    pub fn run_with<C: IPredictionClient + 'static>(
        &self,
        client: C,
        config: &PremiumConfig,
        out: &mut impl Write,
    ) -> Result<bool> {
        let inputs = InputSet::new(&*self.age, &*self.height, &*self.weight);
        let mut session = Session::with_inputs(client, inputs);
        session.submit();
        session.wait_forever();

        let state = session.state();
        if let Some(panel) = render_panel(state, config.display.effective_mode()) {
            writeln!(out, "{panel}")?;
        }
        Ok(state.outcome.as_ref().is_some_and(|o| o.is_success()))
    }
}

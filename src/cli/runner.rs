use crate::{
    cli::Args,
    error::Result,
    ioutils::{read_template, write_output},
    renderer::get_renderer,
    vars::{parse_assignment, Variables},
};

/// Main CLI runner: reads the template, gathers variables, renders, writes.
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Renders the template without writing it anywhere.
    pub fn render(&self) -> Result<String> {
        let template = read_template(&self.args.template)?;
        let vars = self.collect_variables()?;
        log::info!(
            "Rendering '{}' with {} variable(s) using the {} engine",
            self.args.template,
            vars.len(),
            self.args.engine
        );
        let renderer = get_renderer(self.args.engine);
        Ok(renderer.render(&template, &vars))
    }

    /// Executes the complete render workflow
    pub fn run(self) -> Result<()> {
        let output = self.render()?;
        write_output(&output, self.args.output.as_deref())
    }

    /// Environment first, then `--vars`, then `--set`; later sources win.
    fn collect_variables(&self) -> Result<Variables> {
        let mut vars =
            if self.args.no_env { Variables::new() } else { Variables::from_env() };
        log::debug!("Loaded {} variable(s) from the environment", vars.len());

        if let Some(json) = &self.args.vars {
            vars.extend(Variables::from_json(json)?);
        }
        for raw in &self.args.set {
            let (key, value) = parse_assignment(raw)?;
            log::debug!("Setting '{key}' from the command line");
            vars.insert(key, value);
        }
        Ok(vars)
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    Runner::new(args).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, renderer::EngineKind};

    fn args(template: &str) -> Args {
        Args {
            template: template.to_string(),
            output: None,
            engine: EngineKind::Passes,
            set: Vec::new(),
            vars: None,
            no_env: true,
            verbose: 0,
        }
    }

    #[test]
    fn set_overrides_json_vars() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.tpl");
        std::fs::write(&path, "{{A}}-{{B}}").unwrap();

        let mut args = args(path.to_str().unwrap());
        args.vars = Some(r#"{"A": "json", "B": "json"}"#.to_string());
        args.set = vec!["B=cli".to_string()];
        assert_eq!(Runner::new(args).render().unwrap(), "json-cli");
    }

    #[test]
    fn bad_assignment_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.tpl");
        std::fs::write(&path, "x").unwrap();

        let mut args = args(path.to_str().unwrap());
        args.set = vec!["oops".to_string()];
        assert!(matches!(Runner::new(args).render(), Err(Error::VariablesError(_))));
    }

    #[test]
    fn missing_template_is_reported() {
        let err = Runner::new(args("/definitely/not/here.tpl")).render().unwrap_err();
        assert!(matches!(err, Error::TemplateNotFound { .. }));
    }
}

//! Invocation entry point.

use protojava_core::OutputSink;
use protojava_ir::FileDescriptor;
use serde::Serialize;

use crate::{
    Artifacts, Configuration, Driver, EmitterFactory, GeneratorSettings, ManifestWriter, Result,
    Variant, VariantPlanner, driver::primary_path, options::parse_parameter,
};

/// One schema file in, generated files and manifests out.
///
/// ```text
/// parameter → options → Configuration → variants → Driver → manifests
/// ```
///
/// Any failure aborts the invocation and is returned as a single [`Error`](crate::Error).
/// Files already handed to the sink before a failure stay there.
pub struct Generator<F> {
    factory: F,
    settings: GeneratorSettings,
    planner: VariantPlanner,
}

/// What an invocation would do, without writing anything.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub configuration: Configuration,
    pub variants: Vec<Variant>,
    /// Primary file of each planned variant, in plan order.
    pub primary_files: Vec<String>,
}

impl<F: EmitterFactory> Generator<F> {
    /// Create a generator with default settings.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            settings: GeneratorSettings::default(),
            planner: VariantPlanner::default(),
        }
    }

    /// Override the host settings.
    pub fn with_settings(mut self, settings: GeneratorSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Override the variant planner.
    pub fn with_planner(mut self, planner: VariantPlanner) -> Self {
        self.planner = planner;
        self
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Run one invocation for `file` with the raw `parameter` string.
    pub fn generate(
        &self,
        file: &FileDescriptor,
        parameter: &str,
        sink: &mut dyn OutputSink,
    ) -> Result<Artifacts> {
        let config = self.resolve(parameter)?;
        let variants = self.planner.plan(&config);
        tracing::debug!(
            file = %file.name,
            language = self.factory.language(),
            ?variants,
            "planned generation"
        );

        let mut artifacts = Driver::new(file, &config).run(&self.factory, &variants, sink)?;
        artifacts.manifests = ManifestWriter::new(&config).write(&artifacts, sink)?;

        Ok(artifacts)
    }

    /// Resolve, plan and validate without writing.
    pub fn plan(&self, file: &FileDescriptor, parameter: &str) -> Result<Plan> {
        let configuration = self.resolve(parameter)?;
        let variants = self.planner.plan(&configuration);

        let primary_files = Driver::new(file, &configuration)
            .prepare(&self.factory, &variants)?
            .iter()
            .map(|emitter| primary_path(emitter.as_ref()))
            .collect();

        Ok(Plan {
            configuration,
            variants,
            primary_files,
        })
    }

    fn resolve(&self, parameter: &str) -> Result<Configuration> {
        Configuration::resolve(&parse_parameter(parameter), &self.settings)
    }
}

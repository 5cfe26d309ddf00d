//! Implementation of the `ngfeat new` command.
//!
//! Responsibility: collect answers (flags or prompts), turn them into a
//! `FeatureRequest`, call the core scaffold service, and display results.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use ngfeat_adapters::{BuiltinRenderer, LocalFilesystem};
use ngfeat_core::{
    application::{ScaffoldReport, ScaffoldService},
    domain::{ChildLayout, FeatureName, FeaturePlan, FeatureRequest},
};

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt::{Ask, CHILD_PROMPT, NAME_PROMPT, NESTED_PROMPT},
};

/// Answers to the three questions, however they were obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub name: String,
    pub nested: bool,
    pub child: Option<String>,
}

impl Answers {
    pub fn request(&self) -> FeatureRequest {
        if self.nested {
            FeatureRequest::nested(
                self.name.as_str(),
                self.child.as_deref().map(FeatureName::from),
            )
        } else {
            FeatureRequest::leaf(self.name.as_str())
        }
    }
}

/// Execute the `ngfeat new` command.
///
/// 1. Take answers from flags, or ask for all of them when no name is given
/// 2. Resolve layout, app root, and templates from flags and config
/// 3. Dry run: print the plan and stop
/// 4. Scaffold via `ScaffoldService` and print the confirmation line
#[instrument(skip_all, fields(name = args.name.as_deref().unwrap_or("<prompt>")))]
pub fn execute(
    args: NewArgs,
    config: AppConfig,
    output: OutputManager,
    prompter: &mut dyn Ask,
) -> CliResult<()> {
    let answers = collect_answers(&args, prompter)?;
    let request = answers.request();
    if request.name().is_empty() && !output.is_json() {
        output.warning("Empty feature name: files go directly into the app root")?;
    }

    let layout: ChildLayout = args.layout.map(Into::into).unwrap_or(config.scaffold.layout);
    let app_root = args
        .app_root
        .clone()
        .unwrap_or_else(|| config.scaffold.app_root.clone());

    debug!(
        name = %request.name(),
        nested = request.is_nested(),
        child = request.child().map(FeatureName::as_str).unwrap_or("none"),
        %layout,
        app_root = %app_root.display(),
        "request resolved"
    );

    let renderer = match &config.templates.dir {
        Some(dir) => BuiltinRenderer::from_dir(dir)?,
        None => BuiltinRenderer::new(),
    };
    let service = ScaffoldService::new(Box::new(renderer), Box::new(LocalFilesystem::new()))
        .with_layout(layout);

    if args.dry_run {
        let plan = service.plan(&request, &app_root)?;
        let routes_preview = service.preview_routes(&plan)?;
        return show_plan(&plan, routes_preview, &output);
    }

    info!(name = %request.name(), "scaffold started");
    let report = service.build_structure(&request, &app_root)?;

    if output.is_json() {
        return output.json(&report);
    }

    output.success(&confirmation(&request))?;
    show_report(&report, &output)?;
    Ok(())
}

/// Flags when a name was given; otherwise the three questions in order.
pub fn collect_answers(args: &NewArgs, prompter: &mut dyn Ask) -> CliResult<Answers> {
    if let Some(name) = &args.name {
        return Ok(Answers {
            name: name.clone(),
            nested: args.nested,
            child: args.child.clone(),
        });
    }

    let name = prompter.text(NAME_PROMPT)?;
    let nested = prompter.confirm(NESTED_PROMPT)?;
    let child = if nested {
        Some(prompter.text(CHILD_PROMPT)?)
    } else {
        None
    };

    Ok(Answers {
        name,
        nested,
        child,
    })
}

/// The line printed after a successful run.
pub fn confirmation(request: &FeatureRequest) -> String {
    match request.child() {
        Some(child) => format!(
            "Structure for '{}' with nested '{}' created successfully.",
            request.name(),
            child
        ),
        None => format!("Structure for '{}' created successfully.", request.name()),
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_report(report: &ScaffoldReport, out: &OutputManager) -> CliResult<()> {
    if let Some(routes) = &report.routes {
        let verb = if routes.created { "Created" } else { "Updated" };
        out.info(&format!(
            "{verb} {} ({} route{})",
            routes.path.display(),
            routes.entries,
            if routes.entries == 1 { "" } else { "s" }
        ))?;
    }
    debug!(files = report.files.len(), "report shown");
    Ok(())
}

#[derive(Debug, Serialize)]
struct PlannedRun {
    dry_run: bool,
    root: PathBuf,
    directories: Vec<PathBuf>,
    files: Vec<PathBuf>,
    routes: Option<PlannedRoutes>,
}

#[derive(Debug, Serialize)]
struct PlannedRoutes {
    path: PathBuf,
    content: String,
}

fn show_plan(plan: &FeaturePlan, routes: Option<String>, out: &OutputManager) -> CliResult<()> {
    let root = plan.tree.root();
    let planned = PlannedRun {
        dry_run: true,
        root: root.to_path_buf(),
        directories: plan.tree.directories().map(|d| root.join(&d.path)).collect(),
        files: plan.tree.files().map(|f| root.join(&f.path)).collect(),
        routes: plan
            .routes_path()
            .zip(routes)
            .map(|(path, content)| PlannedRoutes { path, content }),
    };

    if out.is_json() {
        return out.json(&planned);
    }

    out.header(&format!("Dry run: would create '{}'", root.display()))?;
    for dir in &planned.directories {
        out.print(&format!("  {}/", dir.display()))?;
    }
    for file in &planned.files {
        out.print(&format!("  {}", file.display()))?;
    }
    if let Some(routes) = &planned.routes {
        out.print("")?;
        out.info(&format!("would write {}:", routes.path.display()))?;
        out.print(routes.content.trim_end())?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Plan the feature tree from the user's answers
//! 2. Write directories and files
//! 3. Merge the child into the parent's routes file (nested features only)
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer},
    },
    domain::{
        ChildLayout, DATA_DIR, DomainError, FEATURE_DIR, FeaturePlan, FeatureRequest,
        FeatureTree, FsEntry, NameForms, RenderContext, RoutesDocument, RoutesRegistration,
        TemplateKind, UI_DIR, join_under,
    },
    error::{NgfeatError, NgfeatResult},
};

/// What a run wrote, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
    pub routes: Option<RoutesOutcome>,
}

/// Result of the routes merge step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutesOutcome {
    pub path: PathBuf,
    /// `true` when the file did not exist before this run.
    pub created: bool,
    /// Route entries in the file after the merge.
    pub entries: usize,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    layout: ChildLayout,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters and the default
    /// [`ChildLayout`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let service = ScaffoldService::new(
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    /// )
    /// .with_layout(ChildLayout::UnderFeature);
    /// ```
    pub fn new(renderer: Box<dyn TemplateRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
            layout: ChildLayout::default(),
        }
    }

    pub fn with_layout(mut self, layout: ChildLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Plan and write one feature.
    #[instrument(
        skip_all,
        fields(
            feature = %request.name(),
            nested = request.is_nested(),
            app_root = %app_root.as_ref().display()
        )
    )]
    pub fn build_structure(
        &self,
        request: &FeatureRequest,
        app_root: impl AsRef<Path>,
    ) -> NgfeatResult<ScaffoldReport> {
        let plan = self.plan(request, app_root)?;
        self.apply(&plan)
    }

    /// Work out every directory and file for `request` without touching the
    /// filesystem.
    pub fn plan(
        &self,
        request: &FeatureRequest,
        app_root: impl AsRef<Path>,
    ) -> NgfeatResult<FeaturePlan> {
        let name = request.name();
        if name.is_empty() {
            warn!("feature name is empty; files are written directly under the app root");
        }

        let forms = name.forms();
        let mut tree = FeatureTree::new(join_under(app_root.as_ref(), name.as_str()));
        let mut routes = None;
        let here = Path::new("");

        if !request.is_nested() {
            for dir in [DATA_DIR, UI_DIR, FEATURE_DIR] {
                tree.add_directory(dir);
            }
            self.add_data_unit(&mut tree, here, &forms)?;
            self.add_feature_unit(&mut tree, here, &forms)?;
        } else {
            for dir in [DATA_DIR, UI_DIR] {
                tree.add_directory(dir);
            }
            self.add_data_unit(&mut tree, here, &forms)?;

            if let Some(child) = request.child() {
                let child_dir = self.layout.child_dir(child);
                let child_forms = child.forms();

                for dir in [DATA_DIR, UI_DIR, FEATURE_DIR] {
                    tree.add_directory(child_dir.join(dir));
                }
                self.add_data_unit(&mut tree, &child_dir, &child_forms)?;
                self.add_feature_unit(&mut tree, &child_dir, &child_forms)?;

                routes = Some(RoutesRegistration {
                    path: join_under(here, TemplateKind::Routes.file_name(&forms)),
                    parent: forms.clone(),
                    child: child_forms,
                    import_path: self.layout.component_import(child),
                });
            } else {
                debug!("nested feature without a child; no routes change");
            }
        }

        tree.validate().map_err(NgfeatError::Domain)?;
        debug!(entries = tree.entry_count(), "feature planned");

        Ok(FeaturePlan { tree, routes })
    }

    /// Write a plan: directories, then files, then the routes merge.
    ///
    /// Files are overwritten unconditionally. When the routes merge fails,
    /// everything written before it stays in place and the routes file keeps
    /// its previous content.
    #[instrument(skip_all, fields(root = %plan.tree.root().display()))]
    pub fn apply(&self, plan: &FeaturePlan) -> NgfeatResult<ScaffoldReport> {
        let root = plan.tree.root();
        self.filesystem.create_dir_all(root)?;

        let mut report = ScaffoldReport {
            root: root.to_path_buf(),
            directories: Vec::new(),
            files: Vec::new(),
            routes: None,
        };

        for entry in plan.tree.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    let path = root.join(&dir.path);
                    self.filesystem.create_dir_all(&path)?;
                    report.directories.push(path);
                }
                FsEntry::File(file) => {
                    let path = root.join(&file.path);

                    // Ensure parent exists
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }

                    self.filesystem.write_file(&path, &file.content)?;
                    debug!(path = %path.display(), bytes = file.content.len(), "file written");
                    report.files.push(path);
                }
            }
        }

        if let Some(registration) = &plan.routes {
            let path = root.join(&registration.path);
            let (document, created) = self.merged_routes(&path, registration)?;
            self.filesystem.write_file(&path, &document.render())?;

            info!(
                path = %path.display(),
                created,
                entries = document.entry_count(),
                "routes updated"
            );
            report.routes = Some(RoutesOutcome {
                path,
                created,
                entries: document.entry_count(),
            });
        }

        info!(files = report.files.len(), "feature written");
        Ok(report)
    }

    /// The routes file text `apply` would write for `plan`, without writing.
    pub fn preview_routes(&self, plan: &FeaturePlan) -> NgfeatResult<Option<String>> {
        match &plan.routes {
            Some(registration) => {
                let path = plan.tree.root().join(&registration.path);
                let (document, _) = self.merged_routes(&path, registration)?;
                Ok(Some(document.render()))
            }
            None => Ok(None),
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// `<dir>/data/<name>.service.ts` and `<dir>/data/<name>.store.ts`.
    fn add_data_unit(
        &self,
        tree: &mut FeatureTree,
        dir: &Path,
        forms: &NameForms,
    ) -> NgfeatResult<()> {
        self.add_files(
            tree,
            &dir.join(DATA_DIR),
            forms,
            &[TemplateKind::Service, TemplateKind::Store],
        )
    }

    /// `<dir>/feature/<name>.component.{ts,html,scss}`.
    fn add_feature_unit(
        &self,
        tree: &mut FeatureTree,
        dir: &Path,
        forms: &NameForms,
    ) -> NgfeatResult<()> {
        self.add_files(
            tree,
            &dir.join(FEATURE_DIR),
            forms,
            &[
                TemplateKind::Component,
                TemplateKind::ComponentTemplate,
                TemplateKind::ComponentStyle,
            ],
        )
    }

    fn add_files(
        &self,
        tree: &mut FeatureTree,
        dir: &Path,
        forms: &NameForms,
        kinds: &[TemplateKind],
    ) -> NgfeatResult<()> {
        let context = RenderContext::new(forms);
        for &kind in kinds {
            let content = self.renderer.render(kind, &context)?;
            tree.add_file(join_under(dir, kind.file_name(forms)), content);
        }
        Ok(())
    }

    /// Load (or scaffold) the routes document at `path` and add the child.
    fn merged_routes(
        &self,
        path: &Path,
        registration: &RoutesRegistration,
    ) -> NgfeatResult<(RoutesDocument, bool)> {
        let (mut document, created) = match self.filesystem.read_file(path)? {
            Some(text) => {
                let document = RoutesDocument::parse(&text).map_err(|e| {
                    warn!(path = %path.display(), error = %e, "routes file not merged");
                    ApplicationError::MalformedRoutesDocument {
                        path: path.to_path_buf(),
                        reason: malformed_reason(e),
                    }
                })?;
                (document, false)
            }
            None => {
                let context = RenderContext::new(&registration.parent);
                let scaffold = self.renderer.render(TemplateKind::Routes, &context)?;
                let document = RoutesDocument::parse(&scaffold).map_err(|e| {
                    ApplicationError::RenderingFailed {
                        reason: format!("routes template has no route array: {e}"),
                    }
                })?;
                (document, true)
            }
        };

        document.add_child(&registration.child, &registration.import_path);
        Ok((document, created))
    }
}

fn malformed_reason(err: DomainError) -> String {
    match err {
        DomainError::MalformedRoutes { reason } => reason,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::{MockFilesystem, MockTemplateRenderer};
    use crate::domain::FeatureName;
    use crate::error::ErrorCategory;

    const ROUTES_SCAFFOLD: &str = "import { Routes } from '@angular/router';\n\
                                   \n\
                                   export const ORDERS_ROUTES: Routes = [\n\
                                   ];\n";

    fn echo_renderer() -> Box<MockTemplateRenderer> {
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().returning(|kind, ctx| {
            Ok(match kind {
                TemplateKind::Routes => ROUTES_SCAFFOLD.to_string(),
                other => format!("{other}:{}", ctx.feature_name()),
            })
        });
        Box::new(renderer)
    }

    fn planner(layout: ChildLayout) -> ScaffoldService {
        ScaffoldService::new(echo_renderer(), Box::new(MockFilesystem::new())).with_layout(layout)
    }

    fn file_paths(plan: &FeaturePlan) -> Vec<PathBuf> {
        plan.tree.files().map(|f| f.path.clone()).collect()
    }

    // ── plan ─────────────────────────────────────────────────────────────────

    #[test]
    fn leaf_feature_gets_data_and_feature_units() {
        let plan = planner(ChildLayout::Flat)
            .plan(&FeatureRequest::leaf("widgets"), "src/app")
            .unwrap();

        assert_eq!(plan.tree.root(), Path::new("src/app/widgets"));
        assert_eq!(
            file_paths(&plan),
            vec![
                PathBuf::from("data/widgets.service.ts"),
                PathBuf::from("data/widgets.store.ts"),
                PathBuf::from("feature/widgets.component.ts"),
                PathBuf::from("feature/widgets.component.html"),
                PathBuf::from("feature/widgets.component.scss"),
            ]
        );
        let dirs: Vec<_> = plan.tree.directories().map(|d| d.path.clone()).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("data"),
                PathBuf::from("ui"),
                PathBuf::from("feature")
            ]
        );
        assert!(plan.routes.is_none());
        assert_eq!(
            plan.tree.file("data/widgets.service.ts").unwrap().content,
            "service:widgets"
        );
    }

    #[test]
    fn nested_child_is_planned_under_parent() {
        let plan = planner(ChildLayout::Flat)
            .plan(
                &FeatureRequest::nested("orders", Some(FeatureName::from("list"))),
                "src/app",
            )
            .unwrap();

        let files = file_paths(&plan);
        assert!(files.contains(&PathBuf::from("data/orders.service.ts")));
        assert!(files.contains(&PathBuf::from("list/data/list.store.ts")));
        assert!(files.contains(&PathBuf::from("list/feature/list.component.ts")));
        assert!(!files.contains(&PathBuf::from("feature/orders.component.ts")));

        let routes = plan.routes.as_ref().unwrap();
        assert_eq!(routes.path, PathBuf::from("orders.routes.ts"));
        assert_eq!(routes.import_path, "./list/feature/list.component");
        assert_eq!(
            plan.routes_path().unwrap(),
            Path::new("src/app/orders/orders.routes.ts")
        );
    }

    #[test]
    fn under_feature_layout_moves_child() {
        let plan = planner(ChildLayout::UnderFeature)
            .plan(
                &FeatureRequest::nested("orders", Some(FeatureName::from("list"))),
                "src/app",
            )
            .unwrap();

        assert!(
            file_paths(&plan).contains(&Path::new("feature/list/feature/list.component.ts").into())
        );
        assert_eq!(
            plan.routes.unwrap().import_path,
            "./feature/list/feature/list.component"
        );
    }

    #[test]
    fn nested_without_child_only_scaffolds_parent_data() {
        let plan = planner(ChildLayout::Flat)
            .plan(&FeatureRequest::nested("orders", None), "src/app")
            .unwrap();

        assert!(plan.routes.is_none());
        assert_eq!(
            file_paths(&plan),
            vec![
                PathBuf::from("data/orders.service.ts"),
                PathBuf::from("data/orders.store.ts"),
            ]
        );
    }

    #[test]
    fn rooted_child_name_lands_under_parent() {
        let plan = planner(ChildLayout::Flat)
            .plan(
                &FeatureRequest::nested("orders", Some(FeatureName::from("/abs"))),
                "src/app",
            )
            .unwrap();

        assert_eq!(plan.tree.root(), Path::new("src/app/orders"));
        assert!(plan.tree.file("abs/data/abs.service.ts").is_some());
        assert!(plan.tree.file("abs/feature/abs.component.ts").is_some());
        assert_eq!(
            plan.routes.as_ref().map(|r| r.import_path.as_str()),
            Some("./abs/feature/abs.component")
        );
    }

    #[test]
    fn rooted_feature_name_lands_under_app_root() {
        let plan = planner(ChildLayout::Flat)
            .plan(&FeatureRequest::leaf("/abs"), "src/app")
            .unwrap();

        assert_eq!(plan.tree.root(), Path::new("src/app/abs"));
        assert!(plan.tree.file("data/abs.service.ts").is_some());
    }

    // ── apply ────────────────────────────────────────────────────────────────

    #[test]
    fn malformed_routes_file_is_never_written() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_read_file()
            .returning(|_| Ok(Some("export const BROKEN = [\n".to_string())));
        fs.expect_write_file()
            .withf(|path, _| !path.ends_with("orders.routes.ts"))
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|path, _| path.ends_with("orders.routes.ts"))
            .never();

        let service = ScaffoldService::new(echo_renderer(), Box::new(fs));
        let err = service
            .build_structure(
                &FeatureRequest::nested("orders", Some(FeatureName::from("list"))),
                "src/app",
            )
            .unwrap_err();

        match err {
            NgfeatError::Application(ApplicationError::MalformedRoutesDocument { path, .. }) => {
                assert_eq!(path, Path::new("src/app/orders/orders.routes.ts"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_routes_file_is_created_from_template() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_read_file().returning(|_| Ok(None));
        fs.expect_write_file()
            .withf(|path, content| {
                !path.ends_with("orders.routes.ts")
                    || content.contains("{ path: 'list', component: ListComponent },")
            })
            .returning(|_, _| Ok(()));

        let service = ScaffoldService::new(echo_renderer(), Box::new(fs));
        let report = service
            .build_structure(
                &FeatureRequest::nested("orders", Some(FeatureName::from("list"))),
                "src/app",
            )
            .unwrap();

        let routes = report.routes.unwrap();
        assert!(routes.created);
        assert_eq!(routes.entries, 1);
        assert_eq!(report.files.len(), 7);
    }

    #[test]
    fn filesystem_failure_propagates() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|path, _| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });

        let service = ScaffoldService::new(echo_renderer(), Box::new(fs));
        let err = service
            .build_structure(&FeatureRequest::leaf("widgets"), "src/app")
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn preview_routes_does_not_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_file()
            .returning(|_| Ok(Some(ROUTES_SCAFFOLD.to_string())));
        fs.expect_write_file().never();

        let service = ScaffoldService::new(echo_renderer(), Box::new(fs));
        let plan = service
            .plan(
                &FeatureRequest::nested("orders", Some(FeatureName::from("detail"))),
                "src/app",
            )
            .unwrap();
        let preview = service.preview_routes(&plan).unwrap().unwrap();
        assert!(preview.contains("import { DetailComponent } from './detail/feature/detail.component';"));
    }
}

//! Template bodies that ship with ngfeat.
//!
//! One body per [`TemplateKind`]. Bodies use the placeholders documented in
//! `ngfeat_core::domain::template`; all files of a run come from the same set.

use ngfeat_core::domain::TemplateKind;

pub const SERVICE: &str = "\
import { Injectable } from '@angular/core';

@Injectable({
  providedIn: 'root',
})
export class {{FEATURE_NAME_PASCAL}}Service {}
";

pub const STORE: &str = "\
import { Injectable, inject } from '@angular/core';
import { {{FEATURE_NAME_PASCAL}}Service } from './{{FEATURE_NAME_KEBAB}}.service';

@Injectable({
  providedIn: 'root',
})
export class {{FEATURE_NAME_PASCAL}}Store {
  private readonly {{FEATURE_NAME_CAMEL}}Service = inject({{FEATURE_NAME_PASCAL}}Service);
}
";

pub const COMPONENT: &str = "\
import { Component } from '@angular/core';

@Component({
  selector: 'app-{{FEATURE_NAME_KEBAB}}',
  standalone: true,
  imports: [],
  templateUrl: './{{FEATURE_NAME_KEBAB}}.component.html',
  styleUrls: ['./{{FEATURE_NAME_KEBAB}}.component.scss'],
})
export class {{FEATURE_NAME_PASCAL}}Component {}
";

pub const COMPONENT_TEMPLATE: &str = "<p>{{FEATURE_NAME}} works!</p>\n";

pub const COMPONENT_STYLE: &str = "";

/// Routes scaffold with zero entries.
pub const ROUTES: &str = "\
import { Routes } from '@angular/router';

export const {{FEATURE_NAME_SCREAMING}}_ROUTES: Routes = [
];
";

/// Built-in body for `kind`.
pub const fn body(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::Service => SERVICE,
        TemplateKind::Store => STORE,
        TemplateKind::Component => COMPONENT,
        TemplateKind::ComponentTemplate => COMPONENT_TEMPLATE,
        TemplateKind::ComponentStyle => COMPONENT_STYLE,
        TemplateKind::Routes => ROUTES,
    }
}

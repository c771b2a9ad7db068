use std::fmt;
use std::str::FromStr;
use log::debug;
use oxc_allocator::Allocator;
use oxc_codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc_mangler::{Mangler, MangleOptions as OxcMangleOptions, MangleOptionsKeepNames};
use oxc_minifier::{CompressOptions as OxcCompressOptions, CompressOptionsKeepNames,
                   CompressOptionsUnused, Minifier, MinifierOptions, PropertyReadSideEffects,
                   TreeShakeOptions};
use oxc_parser::Parser;
use oxc_semantic::SemanticBuilder;
use oxc_span::SourceType;
use oxc_syntax::es_target::ESTarget;
use oxc_transformer_plugins::{ReplaceGlobalDefines, ReplaceGlobalDefinesConfig};

use crate::errors::*;
use crate::options::{CompressOptions, MangleOptions, MinifyOptions};

/// Something that can turn JavaScript source text into minified source text
pub trait JsMinifier {
    /// Minify `source` according to `options`.
    /// Input the minifier cannot handle is reported as [ErrorKind::Transform]
    fn minify(&self, source: &str, options: &MinifyOptions) -> Result<String>;
}

/// [JsMinifier] backed by the oxc parser, compressor, mangler and code generator
#[derive(Debug, Default, Clone, Copy)]
pub struct OxcMinifier;

impl JsMinifier for OxcMinifier {
    fn minify(&self, source: &str, options: &MinifyOptions) -> Result<String> {
        let allocator = Allocator::default();
        let source_type = SourceType::mjs().with_module(options.module);

        let parsed = Parser::new(&allocator, source, source_type).parse();
        if parsed.panicked || !parsed.errors.is_empty() {
            bail!(ErrorKind::Transform(join_diagnostics(&parsed.errors)));
        }
        let mut program = parsed.program;

        let checked = SemanticBuilder::new()
            .with_check_syntax_error(true)
            .build(&program);
        if !checked.errors.is_empty() {
            bail!(ErrorKind::Transform(join_diagnostics(&checked.errors)));
        }
        let scoping = checked.semantic.into_scoping();

        if !options.compress.global_defs.is_empty() {
            let defines = ReplaceGlobalDefinesConfig::new(options.compress.global_defs)
                .map_err(|errors| Error::from(ErrorKind::Transform(join_diagnostics(&errors))))?;
            let _ = ReplaceGlobalDefines::new(&allocator, defines).build(scoping, &mut program);
        }

        let target = es_target(options.format.ecma)?;
        let compress = compress_options(&options.compress, &options.mangle, target);
        debug!("Compressing for {} with at most {} passes", compress.target, options.compress.passes);
        let _ = Minifier::new(MinifierOptions { mangle: None, compress: Some(compress) })
            .minify(&allocator, &mut program);

        // Names as declared, indexed by the same symbol ids the mangler will assign
        let declared = SemanticBuilder::new().build(&program).semantic.into_scoping();
        let mut scoping = Mangler::new()
            .with_options(mangle_options(&options.mangle))
            .build(&program);

        let root_scope = declared.root_scope_id();
        for symbol_id in declared.symbol_ids() {
            let name = declared.symbol_name(symbol_id);
            let top_level = declared.symbol_scope_id(symbol_id) == root_scope;
            let keep = options.mangle.is_reserved(name) || (top_level && !options.mangle.toplevel);
            if keep && scoping.symbol_name(symbol_id) != name {
                debug!("Restoring name '{name}'");
                scoping.set_symbol_name(symbol_id, name);
            }
        }

        let mut codegen_options = CodegenOptions {
            minify: !options.format.beautify,
            ..CodegenOptions::default()
        };
        if !options.format.comments {
            codegen_options.comments = CommentOptions::disabled();
        }

        Ok(Codegen::new()
            .with_options(codegen_options)
            .with_scoping(Some(scoping))
            .build(&program)
            .code)
    }
}

fn compress_options(compress: &CompressOptions, mangle: &MangleOptions, target: ESTarget)
    -> OxcCompressOptions {
    let side_effect_free_reads = compress.unsafe_transforms;
    OxcCompressOptions {
        target,
        drop_debugger: compress.drop_debugger,
        drop_console: compress.drop_console,
        join_vars: compress.join_vars,
        unused: if compress.unused || compress.dead_code {
            CompressOptionsUnused::Remove
        } else {
            CompressOptionsUnused::Keep
        },
        keep_names: CompressOptionsKeepNames {
            function: mangle.keep_fnames,
            class: mangle.keep_classnames,
        },
        treeshake: TreeShakeOptions {
            manual_pure_functions: compress.pure_funcs.iter().map(|name| name.to_string()).collect(),
            property_read_side_effects: if side_effect_free_reads {
                PropertyReadSideEffects::None
            } else {
                PropertyReadSideEffects::All
            },
            unknown_global_side_effects: !side_effect_free_reads,
            ..TreeShakeOptions::default()
        },
        max_iterations: Some(compress.passes.max(1)),
        ..OxcCompressOptions::smallest()
    }
}

/// The oxc target for an ECMAScript edition. oxc enables logical assignment (ES2021)
/// from its ES2020 target on, so ES2020 output is compressed as ES2019.
fn es_target(ecma: u16) -> Result<ESTarget> {
    let target = ESTarget::from_str(&format!("es{ecma}"))
        .map_err(|message| Error::from(format!("unsupported ecma version {ecma}: {message}")))?;
    Ok(if target == ESTarget::ES2020 { ESTarget::ES2019 } else { target })
}

fn mangle_options(options: &MangleOptions) -> OxcMangleOptions {
    OxcMangleOptions {
        top_level: options.toplevel,
        keep_names: MangleOptionsKeepNames {
            function: options.keep_fnames,
            class: options.keep_classnames,
        },
        debug: false,
    }
}

fn join_diagnostics<D: fmt::Display>(diagnostics: &[D]) -> String {
    if diagnostics.is_empty() {
        return "parser gave up on the source".into();
    }

    diagnostics.iter()
        .map(|diagnostic| diagnostic.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

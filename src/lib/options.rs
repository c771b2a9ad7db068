/// Compression settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressOptions {
    /// Upper bound on the compressor's fixed-point iterations
    pub passes: u8,
    /// Remove unreachable code; with `unused`, selects oxc's `Remove` mode
    pub dead_code: bool,
    /// Remove every `console.*` call
    pub drop_console: bool,
    /// Remove `debugger` statements
    pub drop_debugger: bool,
    /// Calls that may be dropped when their result is unused
    pub pure_funcs: &'static [&'static str],
    /// Treat property reads and unknown globals as free of side effects
    pub unsafe_transforms: bool,
    /// Always on in oxc's compressor
    pub conditionals: bool,
    /// Always on in oxc's compressor
    pub booleans: bool,
    /// Always on in oxc's compressor
    pub loops: bool,
    /// Drop unreferenced functions and variables
    pub unused: bool,
    /// Always on in oxc's compressor
    pub hoist_funs: bool,
    /// Always on in oxc's compressor
    pub hoist_props: bool,
    /// oxc never hoists `var` declarations
    pub hoist_vars: bool,
    /// Always on in oxc's compressor
    pub if_return: bool,
    /// Join consecutive declarations
    pub join_vars: bool,
    /// Always on in oxc's compressor
    pub side_effects: bool,
    /// Global identifiers replaced by a constant expression before compression
    pub global_defs: &'static [(&'static str, &'static str)],
}

/// Identifier renaming settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MangleOptions {
    /// Rename declarations in the top level scope
    pub toplevel: bool,
    /// oxc never renames in scopes that call `eval` directly
    pub eval: bool,
    /// Keep class names, for the compressor and the mangler
    pub keep_classnames: bool,
    /// Keep function names, for the compressor and the mangler
    pub keep_fnames: bool,
    /// Names that are never renamed, wherever they are declared
    pub reserved: &'static [&'static str],
    /// oxc never renames object properties
    pub properties: bool,
}

/// Output printing settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Keep comments in the output
    pub comments: bool,
    /// oxc's printer writes non-ASCII characters as they are
    pub ascii_only: bool,
    /// Print readable output instead of minified output
    pub beautify: bool,
    /// oxc's minified printer drops optional braces
    pub braces: bool,
    /// ECMAScript edition the compressor may emit syntax from
    pub ecma: u16,
}

/// The full configuration handed to a [crate::JsMinifier]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinifyOptions {
    pub compress: CompressOptions,
    pub mangle: MangleOptions,
    pub format: FormatOptions,
    /// Treat the source as an ES module rather than a classic script
    pub module: bool,
}

/// The one configuration minjs runs with. It is not derived from the input.
pub const MINIFY_OPTIONS: MinifyOptions = MinifyOptions {
    compress: CompressOptions {
        passes: 6,
        dead_code: true,
        drop_console: true,
        drop_debugger: true,
        pure_funcs: &["console.log", "console.info", "console.debug"],
        unsafe_transforms: false,
        conditionals: true,
        booleans: true,
        loops: true,
        unused: true,
        hoist_funs: true,
        hoist_props: true,
        hoist_vars: false,
        if_return: true,
        join_vars: true,
        side_effects: true,
        global_defs: &[("DEBUG", "false"), ("PRODUCTION", "true")],
    },
    mangle: MangleOptions {
        toplevel: false,
        eval: false,
        keep_classnames: false,
        keep_fnames: false,
        reserved: &["characterId", "userId", "action"],
        properties: false,
    },
    format: FormatOptions {
        comments: false,
        ascii_only: false,
        beautify: false,
        braces: false,
        ecma: 2020,
    },
    module: true,
};

impl MangleOptions {
    /// Is `name` on the list of identifiers that must survive renaming
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved.contains(&name)
    }
}

impl Default for MinifyOptions {
    fn default() -> Self {
        MINIFY_OPTIONS
    }
}

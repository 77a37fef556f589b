//! Built-in nesting rules
//!
//! The default rule table, following the conventions popularized by
//! antfu/vscode-file-nesting-config. Order matters: specific parents
//! (package managers, well-known config files) come before the broad
//! source-file catch-alls so a file is never double-claimed.

use super::rules::{NestingRule, RuleTable};

/// Build the default rule table.
pub fn default_rules() -> RuleTable {
    RuleTable::new(vec![
        // Package managers & build tools
        package_json(),
        cargo_toml(),
        go_mod(),
        composer_json(),
        gemfile(),
        pubspec_yaml(),
        pyproject_toml(),
        requirements_txt(),
        mix_exs(),
        // Configuration files
        gitignore(),
        dockerfile(),
        env(),
        tsconfig_json(),
        deno_json(),
        makefile(),
        cmake_lists(),
        build_bazel(),
        flake_nix(),
        ansible_cfg(),
        // Documentation
        readme(),
        // Source files
        typescript(),
        javascript(),
        typescript_react(),
        javascript_react(),
        vue(),
        svelte(),
        angular_component(),
        css(),
        c_source(),
        cpp_source(),
        go_source(),
        dart_source(),
        python_source(),
        java_source(),
        csharp_source(),
        // Framework configs
        vite_config(),
        next_config(),
        nuxt_config(),
        astro_config(),
        svelte_config(),
        remix_config(),
        gatsby_config(),
        // SvelteKit routing
        sveltekit_page(),
        sveltekit_layout(),
        // Other
        tex_source(),
        agents_md(),
        sanity_config(),
        tauri_config(),
    ])
}

// Package managers & build tools

fn package_json() -> NestingRule {
    NestingRule::new(
        "package.json",
        &[
            // Lock files
            "package-lock.json",
            "pnpm-lock.yaml",
            "yarn.lock",
            "bun.lockb",
            "bun.lock",
            "npm-shrinkwrap.json",
            ".npmrc",
            ".yarnrc",
            ".yarnrc.yml",
            "pnpm-workspace.yaml",
            ".pnpmfile.cjs",
            ".npmignore",
            // TypeScript
            "tsconfig.json",
            "tsconfig.*.json",
            "tsconfig-*.json",
            "jsconfig.json",
            "jsconfig.*.json",
            // ESLint
            ".eslintrc",
            ".eslintrc.*",
            "eslint.config.*",
            ".eslintignore",
            ".eslintcache",
            // Prettier
            ".prettierrc",
            ".prettierrc.*",
            "prettier.config.*",
            ".prettierignore",
            // Stylelint
            ".stylelintrc",
            ".stylelintrc.*",
            "stylelint.config.*",
            ".stylelintignore",
            ".stylelintcache",
            // Build tools
            "vite.config.*",
            "vitest.config.*",
            "vitest.workspace.*",
            "webpack.config.*",
            "webpack.*.config.*",
            "rollup.config.*",
            "esbuild.config.*",
            "esbuild.mjs",
            "tsup.config.*",
            "unbuild.config.*",
            "build.config.*",
            "turbo.json",
            "lerna.json",
            "nx.json",
            "project.json",
            "rush.json",
            // Testing
            "jest.config.*",
            "jest.setup.*",
            "jest-preset.*",
            "playwright.config.*",
            "playwright-ct.config.*",
            "cypress.config.*",
            "cypress.json",
            ".mocharc.*",
            "mocha.opts",
            "karma.conf.*",
            "protractor.conf.*",
            "nightwatch.conf.*",
            "wdio.conf.*",
            // Other configs
            ".babelrc",
            ".babelrc.*",
            "babel.config.*",
            "postcss.config.*",
            ".postcssrc",
            ".postcssrc.*",
            "tailwind.config.*",
            ".browserslistrc",
            "browserslist",
            ".editorconfig",
            ".commitlintrc",
            ".commitlintrc.*",
            "commitlint.config.*",
            ".cz-config.js",
            ".czrc",
            ".huskyrc",
            ".huskyrc.*",
            ".husky",
            ".lintstagedrc",
            ".lintstagedrc.*",
            "lint-staged.config.*",
            ".ls-lint.yml",
            ".markdownlint.*",
            ".markdownlintignore",
            ".node-version",
            ".nvmrc",
            ".tool-versions",
            ".nodemon.json",
            "nodemon.json",
            ".env",
            ".env.*",
            ".envrc",
            ".gitpod.yml",
            ".releaserc",
            ".releaserc.*",
            "release.config.*",
            ".changeset",
            ".sentryclirc",
            ".swcrc",
            ".vercelignore",
            "vercel.json",
            ".nowignore",
            "now.json",
            "netlify.toml",
            "firebase.json",
            ".firebaserc",
            "renovate.json",
            "renovate.json5",
            ".renovaterc",
            ".renovaterc.json",
            "simple-git-hooks.cjs",
            ".simple-git-hooks.*",
            "sonar-project.properties",
            "lefthook.yml",
            "lefthook.yaml",
            ".lefthook.yml",
            ".lefthook.yaml",
            ".cspell.json",
            "cspell.json",
            "cspell.config.*",
            ".knip.json",
            "knip.json",
            "knip.config.*",
            "knip.ts",
            "biome.json",
            "biome.jsonc",
            "dprint.json",
            ".dprint.json",
            "dprint.jsonc",
            ".dprint.jsonc",
            ".watchmanconfig",
        ],
    )
}

fn cargo_toml() -> NestingRule {
    NestingRule::new(
        "Cargo.toml",
        &[
            "Cargo.lock",
            "Cargo.Bazel.lock",
            ".rustfmt.toml",
            "rustfmt.toml",
            ".clippy.toml",
            "clippy.toml",
            "rust-toolchain.toml",
            "cross.toml",
            "insta.yaml",
        ],
    )
}

fn go_mod() -> NestingRule {
    NestingRule::new("go.mod", &["go.sum"])
}

fn composer_json() -> NestingRule {
    NestingRule::new(
        "composer.json",
        &[
            "composer.lock",
            "phpunit.xml",
            "phpunit.xml.*",
            "psalm.xml",
            "psalm*.xml",
            ".php*.cache",
            ".phpunit.*",
            "phpstan.neon",
            "phpstan.neon.*",
        ],
    )
}

fn gemfile() -> NestingRule {
    NestingRule::new("Gemfile", &["Gemfile.lock", ".ruby-version", ".ruby-gemset"])
}

fn pubspec_yaml() -> NestingRule {
    NestingRule::new(
        "pubspec.yaml",
        &[
            "pubspec.lock",
            "pubspec_overrides.yaml",
            ".metadata",
            ".packages",
            "analysis_options.yaml",
            "all_lint_rules.yaml",
            "build.yaml",
        ],
    )
}

fn pyproject_toml() -> NestingRule {
    NestingRule::new(
        "pyproject.toml",
        &[
            "poetry.lock",
            "poetry.toml",
            "pdm.lock",
            ".pdm.toml",
            ".pdm-python",
            "uv.lock",
            "setup.py",
            "setup.cfg",
            "Pipfile",
            "Pipfile.lock",
            "hatch.toml",
            "requirements.txt",
            "requirements*.txt",
            "requirements.in",
            "requirements*.in",
            ".python-version",
            "pytest.ini",
            "conftest.py",
            "tox.ini",
            "noxfile.py",
            ".flake8",
            ".pep8",
            ".pylintrc",
            "pylintrc",
            ".isort.cfg",
            "mypy.ini",
            ".mypy.ini",
            ".coveragerc",
            ".coverage",
            "MANIFEST.in",
        ],
    )
}

fn requirements_txt() -> NestingRule {
    NestingRule::new(
        "requirements.txt",
        &[
            "requirements*.txt",
            "requirements*.in",
            "requirements*.pip",
            "constraints.txt",
            "constraints*.txt",
        ],
    )
}

fn mix_exs() -> NestingRule {
    NestingRule::new(
        "mix.exs",
        &[
            "mix.lock",
            ".formatter.exs",
            ".credo.exs",
            ".dialyzer_ignore.exs",
            ".iex.exs",
            ".tool-versions",
        ],
    )
}

// Configuration files

fn gitignore() -> NestingRule {
    NestingRule::new(
        ".gitignore",
        &[
            ".gitattributes",
            ".gitmodules",
            ".gitmessage",
            ".lfsconfig",
            ".mailmap",
            ".git-blame*",
        ],
    )
}

fn dockerfile() -> NestingRule {
    NestingRule::new(
        "Dockerfile",
        &[
            "Dockerfile.*",
            "dockerfile.*",
            "*.dockerfile",
            ".dockerignore",
            "docker-compose.yml",
            "docker-compose.yaml",
            "docker-compose.*.yml",
            "docker-compose.*.yaml",
            "compose.yml",
            "compose.yaml",
            "compose.*.yml",
            "compose.*.yaml",
            ".devcontainer.json",
            "devcontainer.json",
            "captain-definition",
        ],
    )
}

fn env() -> NestingRule {
    NestingRule::new(".env", &[".env.*", "*.env", ".envrc", "env.d.ts"])
}

fn tsconfig_json() -> NestingRule {
    NestingRule::new(
        "tsconfig.json",
        &["tsconfig.*.json", "tsconfig-*.json", "*.tsbuildinfo"],
    )
}

fn deno_json() -> NestingRule {
    NestingRule::new(
        "deno.json*",
        &[
            "deno.lock",
            "import_map.json",
            "import-map.json",
            "tsconfig.json",
            ".env",
            ".env.*",
        ],
    )
}

fn makefile() -> NestingRule {
    NestingRule::new("Makefile", &["*.mk", "Makefile.*"])
}

fn cmake_lists() -> NestingRule {
    NestingRule::new(
        "CMakeLists.txt",
        &[
            "*.cmake",
            "*.cmake.in",
            ".cmake-format.yaml",
            "CMakePresets.json",
            "CMakeCache.txt",
        ],
    )
}

fn build_bazel() -> NestingRule {
    NestingRule::new(
        "BUILD.bazel",
        &[
            "*.bzl",
            "*.bazel",
            "*.bazelrc",
            "bazel.rc",
            ".bazelignore",
            ".bazelproject",
            ".bazelversion",
            "MODULE.bazel.lock",
            "WORKSPACE",
            "WORKSPACE.bazel",
        ],
    )
}

fn flake_nix() -> NestingRule {
    NestingRule::new("flake.nix", &["flake.lock", "default.nix", "shell.nix"])
}

fn ansible_cfg() -> NestingRule {
    NestingRule::new("ansible.cfg", &[".ansible-lint", "requirements.yml"])
}

// Documentation

fn readme() -> NestingRule {
    NestingRule::new(
        "README*",
        &[
            "readme*",
            "AUTHORS*",
            "authors*",
            "CHANGELOG*",
            "changelog*",
            "HISTORY*",
            "history*",
            "CHANGES*",
            "changes*",
            "RELEASE*",
            "release*",
            "CONTRIBUTING*",
            "contributing*",
            "CONTRIBUTORS*",
            "contributors*",
            "CODE_OF_CONDUCT*",
            "code_of_conduct*",
            "LICENSE*",
            "license*",
            "LICENCE*",
            "licence*",
            "COPYING*",
            "copying*",
            "SECURITY*",
            "security*",
            "SUPPORT*",
            "support*",
            "CODEOWNERS",
            ".codeowners",
            "FUNDING*",
            ".github",
            "SPONSORS*",
            "sponsors*",
            "BACKERS*",
            "backers*",
        ],
    )
}

// Source files

fn typescript() -> NestingRule {
    NestingRule::new(
        "*.ts",
        &[
            "$(capture).js",
            "$(capture).d.ts",
            "$(capture).d.ts.map",
            "$(capture).js.map",
            "$(capture).*.ts",
            "$(capture)_*.ts",
            "$(capture)_*.js",
            "$(capture).*.js",
        ],
    )
}

fn javascript() -> NestingRule {
    NestingRule::new(
        "*.js",
        &[
            "$(capture).js.map",
            "$(capture).d.ts",
            "$(capture).d.ts.map",
            "$(capture).*.js",
            "$(capture)_*.js",
            "$(capture).js.flow",
        ],
    )
}

fn typescript_react() -> NestingRule {
    NestingRule::new(
        "*.tsx",
        &[
            "$(capture).ts",
            "$(capture).*.tsx",
            "$(capture)_*.tsx",
            "$(capture)_*.ts",
            "$(capture).*.ts",
            "$(capture).css",
            "$(capture).module.css",
            "$(capture).scss",
            "$(capture).module.scss",
            "$(capture).module.scss.d.ts",
            "$(capture).less",
            "$(capture).module.less",
            "$(capture).module.less.d.ts",
            "$(capture).css.ts",
        ],
    )
}

fn javascript_react() -> NestingRule {
    NestingRule::new(
        "*.jsx",
        &[
            "$(capture).js",
            "$(capture).*.jsx",
            "$(capture)_*.jsx",
            "$(capture)_*.js",
            "$(capture).*.js",
            "$(capture).css",
            "$(capture).module.css",
            "$(capture).scss",
            "$(capture).module.scss",
            "$(capture).module.scss.d.ts",
            "$(capture).less",
            "$(capture).module.less",
            "$(capture).module.less.d.ts",
        ],
    )
}

fn vue() -> NestingRule {
    NestingRule::new(
        "*.vue",
        &["$(capture).*.ts", "$(capture).*.js", "$(capture).story.vue"],
    )
}

fn svelte() -> NestingRule {
    NestingRule::new(
        "*.svelte",
        &[
            "$(capture).*.ts",
            "$(capture).*.js",
            "$(capture).svelte.ts",
            "$(capture).svelte.js",
        ],
    )
}

fn angular_component() -> NestingRule {
    NestingRule::new(
        "*.component.ts",
        &[
            "$(capture).component.html",
            "$(capture).component.spec.ts",
            "$(capture).component.css",
            "$(capture).component.scss",
            "$(capture).component.sass",
            "$(capture).component.less",
        ],
    )
}

fn css() -> NestingRule {
    NestingRule::new("*.css", &["$(capture).css.map", "$(capture).*.css"])
}

fn c_source() -> NestingRule {
    NestingRule::new("*.c", &["$(capture).h"])
}

fn cpp_source() -> NestingRule {
    NestingRule::new(
        "*.cpp",
        &["$(capture).hpp", "$(capture).h", "$(capture).hxx", "$(capture).hh"],
    )
}

fn go_source() -> NestingRule {
    NestingRule::new("*.go", &["$(capture)_test.go"])
}

fn dart_source() -> NestingRule {
    NestingRule::new(
        "*.dart",
        &[
            "$(capture).freezed.dart",
            "$(capture).g.dart",
            "$(capture).mapper.dart",
        ],
    )
}

fn python_source() -> NestingRule {
    NestingRule::new("*.py", &["$(capture).pyi"])
}

fn java_source() -> NestingRule {
    NestingRule::new("*.java", &["$(capture).class"])
}

fn csharp_source() -> NestingRule {
    NestingRule::new("*.cs", &["$(capture).*.cs", "$(capture).cs.uid"])
}

// Framework configs

fn vite_config() -> NestingRule {
    NestingRule::new("vite.config.*", &library_patterns())
}

fn next_config() -> NestingRule {
    with_library_patterns("next.config.*", &["next-env.d.ts", "next-i18next.config.*"])
}

fn nuxt_config() -> NestingRule {
    with_library_patterns("nuxt.config.*", &[".nuxtignore", ".nuxtrc"])
}

fn astro_config() -> NestingRule {
    NestingRule::new("astro.config.*", &library_patterns())
}

fn svelte_config() -> NestingRule {
    with_library_patterns(
        "svelte.config.*",
        &["mdsvex.config.js", "vite.config.*", "houdini.config.*"],
    )
}

fn remix_config() -> NestingRule {
    with_library_patterns("remix.config.*", &["remix.*"])
}

fn gatsby_config() -> NestingRule {
    with_library_patterns(
        "gatsby-config.*",
        &[
            "gatsby-browser.*",
            "gatsby-node.*",
            "gatsby-ssr.*",
            "gatsby-transformer.*",
        ],
    )
}

// SvelteKit routing

fn sveltekit_page() -> NestingRule {
    NestingRule::new(
        "+page.svelte",
        &[
            "+page.server.ts",
            "+page.server.js",
            "+page.ts",
            "+page.js",
            "+page.gql",
        ],
    )
}

fn sveltekit_layout() -> NestingRule {
    NestingRule::new(
        "+layout.svelte",
        &[
            "+layout.server.ts",
            "+layout.server.js",
            "+layout.ts",
            "+layout.js",
            "+layout.gql",
        ],
    )
}

// Other

fn tex_source() -> NestingRule {
    NestingRule::new(
        "*.tex",
        &[
            "$(capture).acn",
            "$(capture).acr",
            "$(capture).alg",
            "$(capture).aux",
            "$(capture).bbl",
            "$(capture).blg",
            "$(capture).fdb_latexmk",
            "$(capture).fls",
            "$(capture).glg",
            "$(capture).glo",
            "$(capture).gls",
            "$(capture).idx",
            "$(capture).ind",
            "$(capture).lof",
            "$(capture).log",
            "$(capture).lot",
            "$(capture).out",
            "$(capture).pdf",
            "$(capture).synctex.gz",
            "$(capture).toc",
            "$(capture).xdv",
        ],
    )
}

fn agents_md() -> NestingRule {
    NestingRule::new(
        "AGENTS.md",
        &[
            "AGENT.md",
            "CLAUDE.md",
            "CLAUDE.local.md",
            "GEMINI.md",
            ".clinerules",
            ".cursorrules",
            ".replit.md",
            ".windsurfrules",
        ],
    )
}

fn sanity_config() -> NestingRule {
    NestingRule::new(
        "sanity.config.*",
        &["sanity.cli.*", "sanity.types.ts", "schema.json"],
    )
}

fn tauri_config() -> NestingRule {
    NestingRule::new("tauri.conf.json", &["tauri.*.conf.json"])
}

// Helpers

/// Library/tool config patterns shared by the framework-config rules.
fn library_patterns() -> Vec<&'static str> {
    vec![
        // TypeScript
        "tsconfig.json",
        "tsconfig.*.json",
        "jsconfig.json",
        "jsconfig.*.json",
        // Linting
        ".eslintrc",
        ".eslintrc.*",
        "eslint.config.*",
        ".eslintignore",
        ".prettierrc",
        ".prettierrc.*",
        "prettier.config.*",
        ".prettierignore",
        ".stylelintrc",
        ".stylelintrc.*",
        "stylelint.config.*",
        ".stylelintignore",
        // Build
        ".babelrc",
        ".babelrc.*",
        "babel.config.*",
        "postcss.config.*",
        ".postcssrc",
        ".postcssrc.*",
        "tailwind.config.*",
        // Testing
        "jest.config.*",
        "vitest.config.*",
        "playwright.config.*",
        "cypress.config.*",
        // Env
        ".env",
        ".env.*",
        // Other
        ".editorconfig",
        ".browserslistrc",
    ]
}

/// A framework-config rule: its own children first, then the shared
/// library patterns.
fn with_library_patterns(parent: &str, own: &[&str]) -> NestingRule {
    let mut children: Vec<&str> = own.to_vec();
    children.extend(library_patterns());
    NestingRule::new(parent, &children)
}

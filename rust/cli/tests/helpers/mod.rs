//! Shared helpers for the CLI integration tests.
//!
//! `run_cli` drives `cardwar_cli::run` in-process with in-memory streams;
//! `EnvGuard` sets `CARDWAR_*` variables and restores them on drop. Tests
//! that touch the environment must be marked `#[serial]`.

#![allow(dead_code)]

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_cli(args: &[&str]) -> CliResult {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let argv = std::iter::once("cardwar").chain(args.iter().copied());
    let exit_code = cardwar_cli::run(argv, &mut out, &mut err);
    CliResult {
        exit_code,
        stdout: String::from_utf8(out).expect("stdout is utf-8"),
        stderr: String::from_utf8(err).expect("stderr is utf-8"),
    }
}

const CONFIG_VARS: &[&str] = &[
    "CARDWAR_CONFIG",
    "CARDWAR_SEED",
    "CARDWAR_TOTAL_CARDS",
    "CARDWAR_MAX_CARD_VALUE",
    "CARDWAR_PLAYERS",
    "CARDWAR_MAX_ROUNDS",
];

#[derive(Debug)]
pub struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    /// Clears every `CARDWAR_*` variable, then applies `pairs`.
    pub fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for key in CONFIG_VARS {
            restores.push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::remove_var(key);
            }
        }
        for (key, value) in pairs {
            if !CONFIG_VARS.contains(key) {
                restores.push((key.to_string(), std::env::var(key).ok()));
            }
            unsafe {
                std::env::set_var(key, value);
            }
        }
        EnvGuard { restores }
    }

    pub fn clean() -> Self {
        Self::apply(&[])
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            match previous {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}

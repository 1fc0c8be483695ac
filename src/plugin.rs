//! Plugin entry point and command router
//!
//! The host CLI loads this plugin and resolves the C-ABI [`plugin_run`]
//! symbol, passing argv-style arguments and capturing an integer exit
//! code: 0 for success, 1 for every handled error. No failure is allowed
//! to escape the boundary, including panics.

use crate::cli::output::{format_collection, format_detail, format_help};
use crate::cli::Palette;
use crate::detect::detect_gpus;
use crate::domain::GpuRecord;
use crate::error::{AppError, Result};
use std::ffi::{c_char, c_int, CStr};
use std::io::{self, Write};
use std::panic;

/// Run the plugin with argv-style arguments.
///
/// `args[0]` is the invoking command name and is ignored for parsing.
/// Every outcome maps to an exit code; this function never panics
/// through to the caller.
pub fn run(args: &[String]) -> i32 {
    let outcome = panic::catch_unwind(|| execute(args, &Palette::default()));

    match outcome {
        Ok(Ok(())) => 0,
        Ok(Err(e)) => {
            report_error(&e);
            1
        }
        Err(_) => {
            report_error(&AppError::Internal(
                "unexpected panic during GPU detection".to_string(),
            ));
            1
        }
    }
}

/// C-ABI entry point resolved by the whatsmycli plugin loader (API v2).
///
/// # Safety
///
/// `argv` must point to `argc` valid NUL-terminated strings. Null
/// entries are skipped; non-UTF-8 bytes are replaced lossily.
#[no_mangle]
pub unsafe extern "C" fn plugin_run(argc: c_int, argv: *const *const c_char) -> c_int {
    if argc > 0 && argv.is_null() {
        return 1;
    }

    let mut args = Vec::with_capacity(argc.max(0) as usize);
    for i in 0..argc.max(0) as usize {
        let ptr = *argv.add(i);
        if ptr.is_null() {
            continue;
        }
        args.push(CStr::from_ptr(ptr).to_string_lossy().into_owned());
    }

    run(&args)
}

/// Detect GPUs once, then route on the arguments.
fn execute(args: &[String], colors: &Palette) -> Result<()> {
    let gpus = detect_gpus();
    dispatch(args, &gpus, colors)
}

/// Route one invocation over an already-enumerated record set.
///
/// Separated from [`execute`] so the router is testable against
/// injected records.
fn dispatch(args: &[String], gpus: &[GpuRecord], colors: &Palette) -> Result<()> {
    // An empty enumeration wins over any argument handling.
    if gpus.is_empty() {
        return Err(AppError::NoGpusDetected);
    }

    let extra = args.len().saturating_sub(1);
    match extra {
        0 => {
            let gpu = gpus.iter().find(|g| g.is_active).unwrap_or(&gpus[0]);
            print_stdout(&format_detail(gpu, colors))
        }
        1 => {
            let arg = args[1].as_str();
            match arg {
                "help" | "--help" | "-h" => print_stdout(&format_help(colors)),
                "all" => print_stdout(&format_collection(gpus, colors)),
                _ => {
                    let index: i64 = arg
                        .parse()
                        .map_err(|_| AppError::InvalidArgument(arg.to_string()))?;
                    if index < 0 || index as usize >= gpus.len() {
                        return Err(AppError::IndexOutOfRange {
                            index,
                            count: gpus.len(),
                        });
                    }
                    print_stdout(&format_detail(&gpus[index as usize], colors))
                }
            }
        }
        _ => Err(AppError::TooManyArguments),
    }
}

fn print_stdout(text: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write!(handle, "{text}")?;
    handle.flush()?;
    Ok(())
}

/// Report an error to stderr with hints for common cases.
fn report_error(err: &AppError) {
    log::error!("{err}");

    let colors = Palette::default();
    eprintln!("{}Error: {}{}", colors.yellow, err, colors.reset);

    match err {
        AppError::NoGpusDetected => {
            eprintln!("This could mean:");
            eprintln!("  - No GPU is present in the system");
            eprintln!("  - GPU drivers are not installed");
            eprintln!("  - Insufficient permissions to access GPU information");
        }
        AppError::InvalidArgument(_) | AppError::TooManyArguments => {
            eprintln!("Use 'whatsmy gpu help' for usage information.");
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: Palette = Palette::plain();

    fn args(extra: &[&str]) -> Vec<String> {
        std::iter::once("gpu")
            .chain(extra.iter().copied())
            .map(String::from)
            .collect()
    }

    fn three_gpus() -> Vec<GpuRecord> {
        vec![
            GpuRecord::new(0).with_name("First GPU").with_vendor("NVIDIA"),
            GpuRecord::new(1).with_name("Second GPU").with_vendor("AMD"),
            GpuRecord::new(2).with_name("Third GPU").with_vendor("Intel"),
        ]
    }

    #[test]
    fn test_no_args_shows_active() {
        assert!(dispatch(&args(&[]), &three_gpus(), &PLAIN).is_ok());
    }

    #[test]
    fn test_no_args_falls_back_to_first_without_active() {
        let mut gpus = three_gpus();
        for gpu in &mut gpus {
            gpu.is_active = false;
        }
        assert!(dispatch(&args(&[]), &gpus, &PLAIN).is_ok());
    }

    #[test]
    fn test_help_tokens() {
        for token in ["help", "--help", "-h"] {
            assert!(dispatch(&args(&[token]), &three_gpus(), &PLAIN).is_ok());
        }
    }

    #[test]
    fn test_all_argument() {
        assert!(dispatch(&args(&["all"]), &three_gpus(), &PLAIN).is_ok());
    }

    #[test]
    fn test_in_range_index() {
        assert!(dispatch(&args(&["2"]), &three_gpus(), &PLAIN).is_ok());
    }

    #[test]
    fn test_out_of_range_index() {
        let err = dispatch(&args(&["5"]), &three_gpus(), &PLAIN).unwrap_err();
        assert!(matches!(err, AppError::IndexOutOfRange { index: 5, count: 3 }));
        assert!(err.to_string().contains("0-2"));
    }

    #[test]
    fn test_negative_index_is_out_of_range() {
        let err = dispatch(&args(&["-5"]), &three_gpus(), &PLAIN).unwrap_err();
        assert!(matches!(err, AppError::IndexOutOfRange { index: -5, .. }));
    }

    #[test]
    fn test_invalid_argument() {
        let err = dispatch(&args(&["banana"]), &three_gpus(), &PLAIN).unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
        assert!(err.to_string().contains("banana"));
    }

    #[test]
    fn test_too_many_arguments() {
        let err = dispatch(&args(&["all", "0"]), &three_gpus(), &PLAIN).unwrap_err();
        assert!(matches!(err, AppError::TooManyArguments));
    }

    #[test]
    fn test_empty_enumeration_wins_over_arguments() {
        for extra in [&[][..], &["help"][..], &["all"][..], &["0"][..]] {
            let err = dispatch(&args(extra), &[], &PLAIN).unwrap_err();
            assert!(matches!(err, AppError::NoGpusDetected));
        }
    }

    #[test]
    fn test_run_exit_codes() {
        // run() enumerates real hardware; only the exit-code contract is
        // asserted here, not which branch the platform takes.
        let code = run(&args(&["definitely-not-an-argument", "extra"]));
        assert_eq!(code, 1);
    }
}

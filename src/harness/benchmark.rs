#![allow(non_snake_case)]

use super::*;
use crate::algebra::*;
use crate::cholesky::*;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use crate::timers::TrialTimer;
use derive_builder::Builder;
use std::fs::File;
use std::io::Write;
use std::time::Duration;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[derive(Error, Debug)]
/// Error type returned by a harness run
pub enum HarnessError {
    #[error(transparent)]
    Factorization(#[from] CholeskyError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A strategy produced a factor outside of the accepted tolerance
    #[error("Accuracy check failed for \"{strategy}\" at size {size} (error = {error:e})")]
    AccuracyCheckFailed {
        size: usize,
        strategy: String,
        error: f64,
    },
}

/// Configuration of a timing run

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HarnessSettings<T: FloatT> {
    ///matrix dimensions to time
    #[builder(default = "(2..=10).map(|k| 1 << k).collect()")]
    pub sizes: Vec<usize>,

    ///strategies to time, one report column each
    #[builder(default = r#"["sequential", "vectorized", "parallel"].map(String::from).to_vec()"#)]
    pub strategies: Vec<String>,

    ///untimed calls before timing starts
    #[builder(default = "2")]
    pub warmup_runs: u32,

    ///timed calls per size and strategy.  The fastest is reported
    #[builder(default = "5")]
    pub timed_runs: u32,

    ///seed for the random test matrices
    #[builder(default = "111970")]
    pub seed: u64,

    ///largest accepted relative residual max|M - LL^T| / max|M|
    #[builder(default = "(1e-8).as_T()")]
    pub tolerance: T,

    ///print progress lines
    #[builder(default = "true")]
    pub verbose: bool,

    ///settings shared by every timed factorizer.  Their strategy
    ///field is replaced by each entry of `strategies`
    #[builder(default = "CholeskySettings::default()")]
    pub factor_settings: CholeskySettings<T>,
}

impl<T> Default for HarnessSettings<T>
where
    T: FloatT,
{
    fn default() -> HarnessSettings<T> {
        HarnessSettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> HarnessSettings<T>
where
    T: FloatT,
{
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_sizes(&self.sizes)?;
        validate_strategies(&self.strategies)?;
        validate_timed_runs(self.timed_runs)?;
        self.factor_settings.validate()
    }
}

impl From<SettingsError> for HarnessSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        HarnessSettingsBuilderError::ValidationError(e.to_string())
    }
}

impl<T> HarnessSettingsBuilder<T>
where
    T: FloatT,
{
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(ref sizes) = self.sizes {
            validate_sizes(sizes)?;
        }
        if let Some(ref strategies) = self.strategies {
            validate_strategies(strategies)?;
        }
        if let Some(timed_runs) = self.timed_runs {
            validate_timed_runs(timed_runs)?;
        }
        if let Some(ref factor_settings) = self.factor_settings {
            factor_settings.validate()?;
        }
        Ok(())
    }
}

fn validate_sizes(sizes: &[usize]) -> Result<(), SettingsError> {
    if sizes.is_empty() || sizes.contains(&0) {
        Err(SettingsError::BadFieldValue("sizes"))
    } else {
        Ok(())
    }
}

fn validate_strategies(strategies: &[String]) -> Result<(), SettingsError> {
    if strategies.is_empty() {
        return Err(SettingsError::BadFieldValue("strategies"));
    }
    for s in strategies {
        validate_strategy(s).map_err(|_| SettingsError::BadFieldValue("strategies"))?;
    }
    Ok(())
}

fn validate_timed_runs(timed_runs: u32) -> Result<(), SettingsError> {
    if timed_runs == 0 {
        Err(SettingsError::BadFieldValue("timed_runs"))
    } else {
        Ok(())
    }
}

/// Times every configured strategy over every configured size.
///
/// For each size one random test matrix is generated and shared by all
/// strategies.  Each strategy is first checked against the worked
/// example, then run `warmup_runs` times untimed and `timed_runs` times
/// timed, each call on a freshly zeroed factor.  The fastest timed call
/// is reported, and the last factor is checked against the input.
pub struct Harness<T>
where
    T: FloatT,
{
    pub settings: HarnessSettings<T>,
    print: PrintTarget,
    timer: TrialTimer,
}

impl<T> Harness<T>
where
    T: FloatT,
{
    pub fn new(settings: HarnessSettings<T>) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            settings,
            print: PrintTarget::default(),
            timer: TrialTimer::new(),
        })
    }

    pub fn run(&mut self) -> Result<BenchmarkReport, HarnessError> {
        let settings = &self.settings;
        let timer = &mut self.timer;
        let print = &mut self.print;
        timer.reset();

        // factorizers (and any thread pools) are built once per run
        let mut factorizers = Vec::with_capacity(settings.strategies.len());
        for name in &settings.strategies {
            let mut fs = settings.factor_settings.clone();
            fs.strategy = name.clone();
            let factorizer = CholeskyFactorizer::new(fs)?;

            let error = accuracy_check(&factorizer)?;
            if !(error <= settings.tolerance) {
                return Err(HarnessError::AccuracyCheckFailed {
                    size: 3,
                    strategy: name.clone(),
                    error: error.to_f64().unwrap_or(f64::NAN),
                });
            }
            factorizers.push(factorizer);
        }

        let mut report = BenchmarkReport::new(settings.strategies.clone());

        for &n in &settings.sizes {
            let M = random_spd_matrix::<T>(n, settings.seed);
            let mut L = Matrix::<T>::zeros((n, n));
            let mut best = Vec::with_capacity(factorizers.len());

            for (name, factorizer) in settings.strategies.iter().zip(&factorizers) {
                for _ in 0..settings.warmup_runs {
                    L.data_mut().set(T::zero());
                    factorizer.factorize(&M, &mut L)?;
                }

                timer.reset_key(name);
                for _ in 0..settings.timed_runs {
                    L.data_mut().set(T::zero());
                    crate::timeit! {timer => name; {
                        factorizer.factorize(&M, &mut L)?;
                    }}
                }

                let error = verify_factor(&M, &L);
                if !(error <= settings.tolerance) {
                    return Err(HarnessError::AccuracyCheckFailed {
                        size: n,
                        strategy: name.clone(),
                        error: error.to_f64().unwrap_or(f64::NAN),
                    });
                }

                let time = timer.min(name).unwrap_or(Duration::ZERO);
                if settings.verbose {
                    writeln!(
                        print,
                        "Size = {n}, {name} Cholesky time = \t {:10.10} ms",
                        time.as_secs_f64() * 1000.0
                    )?;
                }
                best.push(time);
            }

            report.push(n, &best);
        }

        Ok(report)
    }
}

impl<T> ConfigurablePrintTarget for Harness<T>
where
    T: FloatT,
{
    fn print_to_stdout(&mut self) {
        self.print.print_to_stdout()
    }
    fn print_to_file(&mut self, file: File) {
        self.print.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.print.print_to_stream(stream)
    }
    fn print_to_buffer(&mut self) {
        self.print.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.print.get_print_buffer()
    }
}

/// Runs the harness with progress written to stdout
pub fn run_benchmark<T>(settings: HarnessSettings<T>) -> Result<BenchmarkReport, HarnessError>
where
    T: FloatT,
{
    Harness::new(settings)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_settings_defaults() {
        let settings = HarnessSettings::<f64>::default();
        assert_eq!(settings.sizes, vec![4, 8, 16, 32, 64, 128, 256, 512, 1024]);
        assert_eq!(settings.strategies.len(), 3);
        assert_eq!(settings.warmup_runs, 2);
        assert_eq!(settings.timed_runs, 5);
        assert_eq!(settings.seed, 111970);
    }

    #[test]
    fn test_harness_settings_validation() {
        let bad = HarnessSettingsBuilder::<f64>::default()
            .strategies(vec!["simd".to_string()])
            .build();
        assert!(bad.is_err());

        let bad = HarnessSettingsBuilder::<f64>::default()
            .sizes(vec![4, 0])
            .build();
        assert!(bad.is_err());

        let bad = HarnessSettingsBuilder::<f64>::default().timed_runs(0).build();
        assert!(bad.is_err());
    }

    #[test]
    fn test_harness_run_to_buffer() {
        let settings = HarnessSettingsBuilder::<f64>::default()
            .sizes(vec![4, 12])
            .warmup_runs(1)
            .timed_runs(2)
            .build()
            .unwrap();
        let mut harness = Harness::new(settings).unwrap();
        harness.print_to_buffer();

        let report = harness.run().unwrap();
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[1].size, 12);
        assert_eq!(report.rows[1].times_ms.len(), 3);

        let output = harness.get_print_buffer().unwrap();
        assert_eq!(output.lines().count(), 6);
        assert!(output.contains("Size = 12, parallel Cholesky time"));
    }
}

use log::info;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Instant;

/// Valeur de métrique typée (compteur ou flottant)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Usize(usize),
    F32(f32),
}

impl From<usize> for MetricValue {
    fn from(v: usize) -> Self {
        MetricValue::Usize(v)
    }
}
impl From<f32> for MetricValue {
    fn from(v: f32) -> Self {
        MetricValue::F32(v)
    }
}

impl MetricValue {
    fn as_f64(&self) -> f64 {
        match self {
            MetricValue::Usize(u) => *u as f64,
            MetricValue::F32(v) => *v as f64,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Usize(u) => write!(f, "{}", u),
            MetricValue::F32(v) => write!(f, "{:.2}", v),
        }
    }
}

/// Données internes du profiler (fenêtres glissantes de `max_samples`)
pub struct ProfilerInner {
    pub samples: HashMap<String, VecDeque<f32>>,
    pub metrics: HashMap<String, VecDeque<MetricValue>>,
    pub max_samples: usize,
    pub total_frame_times: VecDeque<f32>,
}

fn push_bounded<T>(buffer: &mut VecDeque<T>, value: T, max_samples: usize) {
    if buffer.len() >= max_samples {
        buffer.pop_front();
    }
    buffer.push_back(value);
}

/// Profiler partagé : temps de frame, blocs chronométrés, compteurs.
#[derive(Clone)]
pub struct Profiler {
    inner: Arc<RwLock<ProfilerInner>>,
}

impl Profiler {
    pub fn new(max_samples: usize) -> Self {
        let max_samples = max_samples.max(1);
        Self {
            inner: Arc::new(RwLock::new(ProfilerInner {
                samples: HashMap::new(),
                metrics: HashMap::new(),
                max_samples,
                total_frame_times: VecDeque::with_capacity(max_samples),
            })),
        }
    }

    // Un panic pendant un enregistrement ne doit pas bloquer les frames suivantes.
    fn read(&self) -> RwLockReadGuard<'_, ProfilerInner> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, ProfilerInner> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Mesure globale d'une frame (RAII)
    pub fn frame(&self) -> FrameGuard {
        FrameGuard {
            profiler: self.clone(),
            start: Instant::now(),
        }
    }

    /// Enregistre une métrique scalaire typée
    pub fn record_metric<T: Into<MetricValue>>(&self, label: impl Into<String>, value: T) {
        let mut inner = self.write();
        let max_samples = inner.max_samples;
        let buffer = inner.metrics.entry(label.into()).or_default();
        push_bounded(buffer, value.into(), max_samples);
    }

    /// Retourne le FPS moyen
    pub fn fps(&self) -> f32 {
        let inner = self.read();
        if inner.total_frame_times.is_empty() {
            return 0.0;
        }
        let avg =
            inner.total_frame_times.iter().sum::<f32>() / inner.total_frame_times.len() as f32;
        if avg > 0.0 {
            1000.0 / avg
        } else {
            0.0
        }
    }

    /// Nombre de frames dans la fenêtre courante
    pub fn total_frames(&self) -> usize {
        self.read().total_frame_times.len()
    }

    /// Résumé des temps mesurés en ms (moyenne, min, max)
    pub fn summary(&self) -> HashMap<String, (f32, f32, f32)> {
        let inner = self.read();
        inner
            .samples
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.clone(), summarize_series(v)))
            .collect()
    }

    /// Résumé pour une métrique spécifique (moyenne, min, max)
    pub fn metric_summary(&self, label: &str) -> Option<(f64, MetricValue, MetricValue)> {
        let inner = self.read();
        inner.metrics.get(label).and_then(summarize_metric)
    }

    /// Résumé de toutes les métriques scalaires
    pub fn metrics_summary(&self) -> HashMap<String, (f64, MetricValue, MetricValue)> {
        let inner = self.read();
        inner
            .metrics
            .iter()
            .filter_map(|(k, v)| summarize_metric(v).map(|s| (k.clone(), s)))
            .collect()
    }

    /// Profile un bloc de code et retourne sa valeur de retour
    pub fn profile_block<T, F>(&self, label: impl Into<String>, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let start = Instant::now();
        let result = f();
        let dt = start.elapsed().as_secs_f32() * 1000.0;

        let mut inner = self.write();
        let max_samples = inner.max_samples;
        let samples = inner.samples.entry(label.into()).or_default();
        push_bounded(samples, dt, max_samples);

        result
    }

    /// Log toutes les métriques vers l'info log avec un target spécifique
    pub fn log_metrics_for_target(&self, target: &str, show_fps: bool) {
        if show_fps {
            info!(target: target, "{:.2} FPS", self.fps());
        }
        let mut timings: Vec<_> = self.summary().into_iter().collect();
        timings.sort_by(|a, b| a.0.cmp(&b.0));
        for (label, (avg, min, max)) in timings {
            info!(
                target: target,
                "{}: avg = {:.3} ms | min = {:.3} ms | max = {:.3} ms",
                label, avg, min, max
            );
        }
        let mut metrics: Vec<_> = self.metrics_summary().into_iter().collect();
        metrics.sort_by(|a, b| a.0.cmp(&b.0));
        for (label, (avg, min, max)) in metrics {
            info!(target: target, "{label}: avg={avg:.2}, min={min}, max={max}");
        }
    }
}

fn summarize_series(series: &VecDeque<f32>) -> (f32, f32, f32) {
    let avg = series.iter().sum::<f32>() / series.len() as f32;
    let min = series.iter().copied().fold(f32::MAX, f32::min);
    let max = series.iter().copied().fold(f32::MIN, f32::max);
    (avg, min, max)
}

/// Moyenne (en f64) puis min et max dans le type d'origine.
pub fn summarize_metric(
    series: &VecDeque<MetricValue>,
) -> Option<(f64, MetricValue, MetricValue)> {
    let first = *series.front()?;
    let (sum, min, max) = series.iter().fold(
        (0.0_f64, first, first),
        |(sum, min, max), value| {
            let min = if value.as_f64() < min.as_f64() { *value } else { min };
            let max = if value.as_f64() > max.as_f64() { *value } else { max };
            (sum + value.as_f64(), min, max)
        },
    );
    Some((sum / series.len() as f64, min, max))
}

/// Mesure globale d'une frame
pub struct FrameGuard {
    profiler: Profiler,
    start: Instant,
}

impl Drop for FrameGuard {
    fn drop(&mut self) {
        let dt = self.start.elapsed().as_secs_f32() * 1000.0;
        let mut inner = self.profiler.write();
        let max_samples = inner.max_samples;
        push_bounded(&mut inner.total_frame_times, dt, max_samples);
    }
}

/// Macro helper : déduit automatiquement le target via le module appelant
#[macro_export]
macro_rules! log_metrics {
    ($profiler:expr) => {
        $profiler.log_metrics_for_target(module_path!(), false);
    };
}

#[macro_export]
macro_rules! log_metrics_and_fps {
    ($profiler:expr) => {
        $profiler.log_metrics_for_target(module_path!(), true);
    };
}

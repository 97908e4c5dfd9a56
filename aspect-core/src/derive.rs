use crate::layout::{LayoutConfig, LayoutRow, build_layout_table};
use crate::model::dimensions::Dimensions;
use crate::model::state::DimensionState;
use crate::preview::{PreviewSize, preview_for};
use crate::ratio::display_ratio;

/// 由源尺寸推导出的全部展示数据
#[derive(Debug, Clone, PartialEq)]
pub struct Derived {
    pub ratio_label: String,
    pub preview: Option<PreviewSize>,
    pub layout: Vec<LayoutRow>,
}

/// 单条目缓存：键不变时复用上次结果，键变化立即重算
pub struct Memo<K, V> {
    entry: Option<(K, V)>,
    computations: usize,
}

impl<K: PartialEq, V> Memo<K, V> {
    pub fn new() -> Self {
        Self {
            entry: None,
            computations: 0,
        }
    }

    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> &V {
        if self.entry.as_ref().is_some_and(|(cached, _)| *cached != key) {
            self.entry = None;
        }
        let computations = &mut self.computations;
        &self
            .entry
            .get_or_insert_with(|| {
                let value = compute(&key);
                *computations += 1;
                (key, value)
            })
            .1
    }

    /// 实际计算次数
    pub fn computations(&self) -> usize {
        self.computations
    }
}

impl<K: PartialEq, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// 持有配置与缓存，每次源尺寸变化最多推导一次
pub struct Deriver {
    config: LayoutConfig,
    preview_max: f64,
    memo: Memo<Option<Dimensions>, Derived>,
}

impl Deriver {
    pub fn new(config: LayoutConfig, preview_max: f64) -> Self {
        Self {
            config,
            preview_max,
            memo: Memo::new(),
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn preview_max(&self) -> f64 {
        self.preview_max
    }

    pub fn derive(&mut self, state: &DimensionState) -> &Derived {
        let Self {
            config,
            preview_max,
            memo,
        } = self;
        memo.get_or_compute(state.source(), |source| Derived {
            ratio_label: display_ratio(state.source_width, state.source_height),
            preview: preview_for(*source, *preview_max),
            layout: build_layout_table(*source, config),
        })
    }

    /// 推导次数（即布局表构建次数）
    pub fn computations(&self) -> usize {
        self.memo.computations()
    }
}

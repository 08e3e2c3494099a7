//! Fixed Spanish text shown on the dashboard and its charts.

pub const HEADER: &str = "Arsénico en los Principales Cuerpos de Agua de México de 2012-2024";
pub const CAPTION_PREFIX: &str = "Con datos oficiales de la CONAGUA del 2025-05-06, ver:";
pub const CAPTION_LINK_TEXT: &str = "Resultados de la RENAMECA";
pub const CAPTION_LINK_URL: &str = "https://www.gob.mx/conagua/es/articulos/resultados-de-la-red-nacional-de-medicion-de-calidad-del-agua-renameca?idiom=es";
pub const SUBHEADER: &str = "Selecciona los gráficos que deseas visualizar:";

pub const TOGGLE_HISTOGRAM: &str = "Construir un histograma de arsénico";
pub const TOGGLE_SCATTER: &str = "Construir un gráfico de dispersión de arsénico en el tiempo";
pub const TOGGLE_BARS: &str = "Construir un gráfico de barras de los excesos de arsénico en el tiempo";

pub const INTRO_HISTOGRAM: &str = "Creación de un histograma de los niveles de arsénico total de 2012-2024";
pub const INTRO_SCATTER: &str = "Creación de un gráfico de dispersión de los mg/L de arsénico encontrados en las muestras de agua a través del tiempo, según el tipo de agua";
pub const INTRO_BARS: &str = "Creación de un gráfico de barras de los excesos de arsénico encontrados anualmente en aguas subterráneas y superficiales";

/// Annotation on every regulatory limit line.
pub const LIMIT_LINE: &str = "Límite NOM-127 (0.01 mg/L)";

// Histogram
pub const HISTOGRAM_TITLE: &str = "Distribución de Arsénico Totales en Muestras de Agua (México)";
pub const HISTOGRAM_SERIES: &str = "Distribución";
pub const HISTOGRAM_X: &str = "Arsénico Total en Muestra de Agua (mg/L)";
pub const HISTOGRAM_Y: &str = "Frecuencia";

// Scatter
pub const SCATTER_TITLE: &str = "Dispersión de Arsénico en Agua por Tipo de Cuerpo de Agua (México)";
pub const SCATTER_X: &str = "Fecha de Realización de la Muestra";
pub const SCATTER_Y: &str = "Arsénico Total (mg/L)";
pub const SCATTER_FACET: &str = "Tipo de Cuerpo de Agua";
pub const SCATTER_LEGEND: &str = "Tipo de Agua";

// Exceedance bars
pub const BARS_TITLE: &str = "Porcentaje de muestras anuales de agua en México que exceden el límite de arsénico (NOM-127-SSA1-2021)";
pub const BARS_X: &str = "Año";
pub const BARS_Y: &str = "% que excede 0.01 mg/L";
pub const BARS_GROUNDWATER_PANEL: &str = "Agua subterránea";
pub const BARS_SURFACE_PANEL: &str = "Agua superficial";

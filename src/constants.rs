/// 用于标记隐藏信息结束位置的分隔符。
/// 嵌入时无条件追加到信息末尾；提取时扫描到它的首次出现即停止，
/// 分隔符本身不属于原始信息。
pub const DELIMITER: &str = "#####";

/// 未指定输出路径时，默认输出文件名在原文件名 (不含扩展名) 后追加的后缀。
/// 例如 `photo.png` 的默认输出为 `photo_secret.png`。
pub const SECRET_SUFFIX: &str = "_secret";

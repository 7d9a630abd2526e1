pub trait ConfigProvider: Send + Sync {
    fn strict(&self) -> bool;
    fn json_output(&self) -> bool;
    fn log_level(&self) -> Option<&str>;
}

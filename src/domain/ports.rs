use crate::domain::model::{ExportFormat, RoomLayout};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn layout(&self) -> RoomLayout;
    fn branch_order(&self) -> &[String];
    fn export_format(&self) -> ExportFormat;
}

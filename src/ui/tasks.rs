//! 一次性后台任务（照片读取 / 卡片导出）
//!
//! 两类任务都在独立线程中执行，结果经 mpsc 通道送回主事件循环，
//! 由循环原子地应用到状态上。无取消机制；照片读取若有重叠，
//! 后完成者覆盖先完成者。

use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread;

use crate::export::{self, ExportError};
use crate::models::{ApplicationForm, Photo};

/// 后台任务结果
#[derive(Debug)]
pub enum TaskOutcome {
    PhotoLoaded(Result<Photo, String>),
    ExportFinished(Result<PathBuf, ExportError>),
}

/// 启动照片读取任务
pub fn spawn_photo_load(tx: Sender<TaskOutcome>, path: PathBuf) {
    thread::spawn(move || {
        let result = load_photo(&path);
        // 接收端若已随应用退出而关闭，结果直接丢弃
        let _ = tx.send(TaskOutcome::PhotoLoaded(result));
    });
}

/// 读取并解码照片文件
pub fn load_photo(path: &Path) -> Result<Photo, String> {
    let decoded = image::open(path).map_err(|e| e.to_string())?;
    let rgba = decoded.to_rgba8();
    Ok(Photo {
        source: path.to_path_buf(),
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}

/// 启动卡片导出任务
///
/// 不做并发去重：快速连按会启动两个导出，两者各自完成（已知限制）。
pub fn spawn_export(tx: Sender<TaskOutcome>, form: ApplicationForm) {
    thread::spawn(move || {
        let result = export::export_card(&form);
        let _ = tx.send(TaskOutcome::ExportFinished(result));
    });
}

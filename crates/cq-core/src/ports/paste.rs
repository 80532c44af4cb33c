use super::PasteError;

/// Port for synthesizing the platform paste keystroke.
///
/// 模拟系统粘贴按键的端口。
pub trait PasteSimulatorPort: Send + Sync {
    /// Press and release the paste chord (Ctrl+V, Cmd+V on macOS).
    fn paste(&self) -> Result<(), PasteError>;
}

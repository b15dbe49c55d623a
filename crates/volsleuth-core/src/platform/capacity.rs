/// Capacity queries for a mounted volume.
///
/// Unix uses `statvfs`, Windows uses `GetDiskFreeSpaceExW`. Other targets
/// report `Unsupported`, which the registry records as unknown capacity.
use std::io;
use std::path::Path;

/// Total and free bytes of the filesystem holding a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capacity {
    pub total_bytes: u64,
    /// Bytes available to the calling user, clamped to `total_bytes`.
    pub free_bytes: u64,
}

impl Capacity {
    fn new(total_bytes: u64, free_bytes: u64) -> Self {
        Self {
            total_bytes,
            free_bytes: free_bytes.min(total_bytes),
        }
    }
}

#[cfg(unix)]
#[allow(clippy::unnecessary_cast)]
pub fn query(path: &Path) -> io::Result<Capacity> {
    use std::ffi::CString;
    use std::mem::MaybeUninit;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let mut stat = MaybeUninit::<libc::statvfs>::uninit();
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), stat.as_mut_ptr()) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }

    let stat = unsafe { stat.assume_init() };
    let frsize = if stat.f_frsize > 0 {
        stat.f_frsize as u64
    } else {
        stat.f_bsize as u64
    };

    let total = (stat.f_blocks as u64).saturating_mul(frsize);
    let available = (stat.f_bavail as u64).saturating_mul(frsize);
    Ok(Capacity::new(total, available))
}

#[cfg(windows)]
pub fn query(path: &Path) -> io::Result<Capacity> {
    use std::os::windows::ffi::OsStrExt;
    use windows::Win32::Storage::FileSystem::GetDiskFreeSpaceExW;

    let wide: Vec<u16> = path
        .as_os_str()
        .encode_wide()
        .chain(std::iter::once(0))
        .collect();
    let root = windows::core::PCWSTR(wide.as_ptr());

    let mut free_caller: u64 = 0;
    let mut total: u64 = 0;
    let mut free_total: u64 = 0;
    unsafe {
        GetDiskFreeSpaceExW(
            root,
            Some(&mut free_caller as *mut u64),
            Some(&mut total as *mut u64),
            Some(&mut free_total as *mut u64),
        )
    }
    .map_err(|e| io::Error::other(e.to_string()))?;

    Ok(Capacity::new(total, free_caller))
}

#[cfg(not(any(unix, windows)))]
pub fn query(_path: &Path) -> io::Result<Capacity> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "capacity query not supported on this target",
    ))
}

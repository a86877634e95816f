//! Facts about the machine the file manager runs on.

use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct CpuInfo {
    pub model: String,
    pub speed_mhz: u64,
}

impl CpuInfo {
    pub fn speed_ghz(&self) -> f64 {
        self.speed_mhz as f64 / 1000.0
    }
}

pub fn eol() -> &'static str {
    if cfg!(windows) {
        "\r\n"
    } else {
        "\n"
    }
}

pub fn architecture() -> &'static str {
    std::env::consts::ARCH
}

pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}

pub fn cpus() -> Vec<CpuInfo> {
    let mut cpus = read_proc_cpuinfo();

    if cpus.is_empty() {
        let count = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        cpus = vec![
            CpuInfo {
                model: "unknown".to_string(),
                speed_mhz: 0,
            };
            count
        ];
    }

    for (index, cpu) in cpus.iter_mut().enumerate() {
        if cpu.speed_mhz == 0 {
            cpu.speed_mhz = read_cpufreq_mhz(index).unwrap_or(0);
        }
    }

    cpus
}

#[cfg(target_os = "linux")]
fn read_proc_cpuinfo() -> Vec<CpuInfo> {
    match std::fs::read_to_string("/proc/cpuinfo") {
        Ok(text) => parse_cpuinfo(&text),
        Err(e) => {
            log::debug!("cannot read /proc/cpuinfo: {}", e);
            Vec::new()
        }
    }
}

#[cfg(not(target_os = "linux"))]
fn read_proc_cpuinfo() -> Vec<CpuInfo> {
    Vec::new()
}

#[cfg(target_os = "linux")]
fn read_cpufreq_mhz(index: usize) -> Option<u64> {
    ["scaling_cur_freq", "cpuinfo_max_freq"].iter().find_map(|name| {
        let path = format!("/sys/devices/system/cpu/cpu{}/cpufreq/{}", index, name);
        let khz: u64 = std::fs::read_to_string(path).ok()?.trim().parse().ok()?;
        Some(khz / 1000)
    })
}

#[cfg(not(target_os = "linux"))]
fn read_cpufreq_mhz(_index: usize) -> Option<u64> {
    None
}

/// Parses the processor blocks of `/proc/cpuinfo`.
pub fn parse_cpuinfo(text: &str) -> Vec<CpuInfo> {
    let mut cpus = Vec::new();
    let mut current: Option<CpuInfo> = None;

    for line in text.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());

        match key {
            "processor" => {
                if let Some(cpu) = current.take() {
                    cpus.push(cpu);
                }
                current = Some(CpuInfo {
                    model: "unknown".to_string(),
                    speed_mhz: 0,
                });
            }
            "model name" | "Processor" | "cpu model" => {
                if let Some(cpu) = current.as_mut() {
                    cpu.model = value.to_string();
                }
            }
            "cpu MHz" => {
                if let Some(cpu) = current.as_mut() {
                    cpu.speed_mhz = value.parse::<f64>().map(|mhz| mhz.round() as u64).unwrap_or(0);
                }
            }
            _ => {}
        }
    }

    if let Some(cpu) = current {
        cpus.push(cpu);
    }
    cpus
}

/// The login name of the user running the process.
#[cfg(unix)]
pub fn username() -> io::Result<String> {
    use std::ffi::CStr;

    let mut buf = vec![0 as libc::c_char; 4096];
    // SAFETY: passwd is plain data; getpwuid_r only writes into pwd and buf,
    // and result is either null or points at pwd.
    let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
    let mut result: *mut libc::passwd = std::ptr::null_mut();
    let rc = unsafe {
        libc::getpwuid_r(
            libc::getuid(),
            &mut pwd,
            buf.as_mut_ptr(),
            buf.len(),
            &mut result,
        )
    };

    if rc == 0 && !result.is_null() && !pwd.pw_name.is_null() {
        // SAFETY: pw_name points into buf, which is still alive.
        let name = unsafe { CStr::from_ptr(pwd.pw_name) };
        return Ok(name.to_string_lossy().into_owned());
    }

    log::debug!("getpwuid_r failed with code {}", rc);
    username_from_env()
}

#[cfg(not(unix))]
pub fn username() -> io::Result<String> {
    username_from_env()
}

fn username_from_env() -> io::Result<String> {
    ["USER", "USERNAME", "LOGNAME"]
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no user name available"))
}

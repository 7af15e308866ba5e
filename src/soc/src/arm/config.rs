use util::hexstr::parse_hex_u64;
use xlat::TranslationRegime;

/// Build options of the stage, folded into one value when the image is
/// built. Every phase reads them from here.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Bl1Config {
    /// Arm the trusted watchdog for the duration of the stage
    pub trusted_watchdog: bool,
    /// Map code and rodata as two regions with different permissions
    pub separate_code_and_rodata: bool,
    /// Map and initialise the shared library in boot ROM
    pub use_romlib: bool,
    /// Load TB_FW_CONFIG during platform setup
    pub load_tb_fw_config: bool,
    /// Bring the boot cluster into the coherent interconnect
    pub multi_cluster: bool,
    pub regime: TranslationRegime,
    /// Direct EL3 payload entry point; bypasses the normal image chain and
    /// releases secondaries through the trusted mailbox
    pub el3_payload_base: Option<u64>,
}

impl Bl1Config {
    pub const fn from_build() -> Self {
        Self {
            trusted_watchdog: !cfg!(feature = "disable-trusted-wdog"),
            separate_code_and_rodata: cfg!(feature = "separate-code-and-rodata"),
            use_romlib: cfg!(feature = "use-romlib"),
            load_tb_fw_config: cfg!(feature = "load-image-v2"),
            multi_cluster: cfg!(feature = "multi-cluster"),
            regime: if cfg!(feature = "aarch32") {
                TranslationRegime::Aarch32SvcMon
            } else {
                TranslationRegime::El3
            },
            el3_payload_base: match option_env!("EL3_PAYLOAD_BASE") {
                Some(s) => match parse_hex_u64(s) {
                    Some(v) => Some(v),
                    None => panic!("EL3_PAYLOAD_BASE must be a hex address"),
                },
                None => None,
            },
        }
    }
}

/// Configuration of this build, evaluated at compile time.
pub const BUILD_CONFIG: Bl1Config = Bl1Config::from_build();

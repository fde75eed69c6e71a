use std::fs;
use std::path::{Path, PathBuf};

use classforge_io::PipelineConfig;

/// Base station model: BTS at the root, management and hardware beneath
#[allow(dead_code)]
pub const BTS_MODEL_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<XMI>
    <Class name="BTS" isRoot="true" documentation="Base Transmitter Station. This is the only root class">
        <Attribute name="id" type="uint32"/>
        <Attribute name="name" type="string"/>
    </Class>
    <Class name="MGMT" isRoot="false" documentation="Management related">
    </Class>
    <Class name="MetricJob" isRoot="false" documentation="Performance metric job">
        <Attribute name="isFinished" type="boolean"/>
        <Attribute name="jobId" type="uint32"/>
    </Class>
    <Class name="CPLANE" isRoot="false" documentation="Control plane"/>
    <Class name="HWE" isRoot="false" documentation="Hardware equipment"/>
    <Class name="RU" isRoot="false" documentation="Radio Unit hardware element">
        <Attribute name="hwRevision" type="string"/>
        <Attribute name="ipv4Address" type="string"/>
    </Class>
    <Aggregation source="MGMT" target="BTS" sourceMultiplicity="1" targetMultiplicity="1"/>
    <Aggregation source="MetricJob" target="MGMT" sourceMultiplicity="0..100" targetMultiplicity="1"/>
    <Aggregation source="CPLANE" target="MGMT" sourceMultiplicity="0..1" targetMultiplicity="1"/>
    <Aggregation source="HWE" target="BTS" sourceMultiplicity="1" targetMultiplicity="1"/>
    <Aggregation source="RU" target="HWE" sourceMultiplicity="0..42" targetMultiplicity="1"/>
</XMI>
"#;

/// Compact configuration XML expected for [`BTS_MODEL_XML`]
#[allow(dead_code)]
pub const BTS_CONFIG_XML: &str = concat!(
    "<?xml version=\"1.0\" ?>\n",
    "<BTS><id>uint32</id><name>string</name>",
    "<MGMT><MetricJob><isFinished>boolean</isFinished><jobId>uint32</jobId></MetricJob><CPLANE /></MGMT>",
    "<HWE><RU><hwRevision>string</hwRevision><ipv4Address>string</ipv4Address></RU></HWE>",
    "</BTS>"
);

#[allow(dead_code)]
pub const BASE_CONFIG_JSON: &str = r#"{
    "timeout": 30,
    "retries": 3,
    "mode": "auto"
}"#;

#[allow(dead_code)]
pub const TARGET_CONFIG_JSON: &str = r#"{
    "timeout": 60,
    "mode": "auto",
    "logLevel": "debug"
}"#;

/// Write `content` to `dir/name` and return the path
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("fixture write");
    path
}

/// Lay out the standard inputs in `dir` and return a config pointing at them
#[allow(dead_code)]
pub fn standard_inputs(dir: &Path) -> PipelineConfig {
    PipelineConfig {
        model_path: write_file(dir, "impulse_test_input.xml", BTS_MODEL_XML),
        config_path: write_file(dir, "config.json", BASE_CONFIG_JSON),
        patched_config_path: write_file(dir, "patched_config.json", TARGET_CONFIG_JSON),
        output_dir: dir.join("out"),
    }
}

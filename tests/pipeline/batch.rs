use std::sync::Arc;

use laptop_price::{ErrorKind, FeatureVector, LaptopSpec, PipelineConfig, PricePipeline};

use crate::common::{load_request, sample_artifacts};

fn ram_priced_pipeline(parallel_threshold: usize) -> PricePipeline {
    // Price equals RAM, so results reveal which request they belong to
    let model = |fv: &FeatureVector| fv.get("ram").unwrap_or(0.0).ln_1p();
    let config = PipelineConfig {
        parallel_threshold,
        ..PipelineConfig::default()
    };
    PricePipeline::new(Arc::new(sample_artifacts()), Arc::new(model), config).unwrap()
}

fn requests(n: u32) -> Vec<LaptopSpec> {
    let base = load_request("dell_inspiron.json");
    (1..=n)
        .map(|ram| LaptopSpec {
            ram,
            ..base.clone()
        })
        .collect()
}

#[test]
fn parallel_batch_preserves_input_order() {
    let p = ram_priced_pipeline(8);
    let results = p.predict_batch(&requests(200));
    assert_eq!(results.len(), 200);
    for (i, r) in results.iter().enumerate() {
        let est = r.as_ref().expect("priced");
        assert_eq!(est.predicted_price, (i + 1) as f64);
    }
}

#[test]
fn sequential_and_parallel_batches_agree() {
    let specs = requests(50);
    let seq: Vec<f64> = ram_priced_pipeline(usize::MAX)
        .predict_batch(&specs)
        .into_iter()
        .map(|r| r.unwrap().predicted_price)
        .collect();
    let par: Vec<f64> = ram_priced_pipeline(1)
        .predict_batch(&specs)
        .into_iter()
        .map(|r| r.unwrap().predicted_price)
        .collect();
    assert_eq!(seq, par);
}

#[test]
fn failing_request_does_not_affect_others() {
    let mut specs = requests(10);
    specs[3].screen_size = 0.0;
    specs[7].weight = f64::INFINITY;
    let results = ram_priced_pipeline(1).predict_batch(&specs);
    assert_eq!(results[3].as_ref().unwrap_err().kind(), ErrorKind::DivisionError);
    assert_eq!(results[7].as_ref().unwrap_err().kind(), ErrorKind::InvalidInput);
    let ok = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(ok, 8);
}

#[test]
fn pipeline_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PricePipeline>();

    let p = Arc::new(ram_priced_pipeline(usize::MAX));
    let handles: Vec<_> = (1..=4u32)
        .map(|ram| {
            let p = Arc::clone(&p);
            std::thread::spawn(move || {
                let spec = LaptopSpec {
                    ram,
                    ..load_request("dell_inspiron.json")
                };
                p.predict(&spec).unwrap().predicted_price
            })
        })
        .collect();
    let prices: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(prices, vec![1.0, 2.0, 3.0, 4.0]);
}

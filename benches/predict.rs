use criterion::{Criterion, black_box, criterion_group, criterion_main};

use churnscope::model::artifact::ChurnModel;
use churnscope::model::encoding::{CustomerRecord, encode};
use churnscope::model::fields::{Contract, InternetService, PaymentMethod, YesNo};

fn sample_record() -> CustomerRecord {
    CustomerRecord {
        senior_citizen: YesNo::Yes,
        partner: YesNo::No,
        dependents: YesNo::No,
        tenure: 12,
        online_security: InternetService::NoInternetService,
        online_backup: InternetService::No,
        device_protection: InternetService::No,
        tech_support: InternetService::No,
        contract: Contract::OneYear,
        paperless_billing: YesNo::Yes,
        payment_method: PaymentMethod::CreditCard,
        monthly_charges: 70.5,
        total_charges: 840.0,
    }
}

fn bench_encode(c: &mut Criterion) {
    let record = sample_record();
    c.bench_function("encode_record", |b| b.iter(|| encode(black_box(&record))));
}

fn bench_predict(c: &mut Criterion) {
    let model = ChurnModel::load_embedded().expect("embedded artifact");
    let record = sample_record();
    c.bench_function("predict", |b| b.iter(|| model.predict(black_box(&record))));
}

criterion_group!(benches, bench_encode, bench_predict);
criterion_main!(benches);
